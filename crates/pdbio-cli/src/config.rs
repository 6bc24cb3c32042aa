mod builder;
mod defaults;
mod file;

pub use builder::{build_read_options, build_write_options};
pub use file::FileConfig;
