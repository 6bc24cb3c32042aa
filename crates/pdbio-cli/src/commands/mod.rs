pub mod atoms;
pub mod convert;
pub mod info;
