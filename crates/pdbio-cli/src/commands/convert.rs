use crate::cli::ConvertArgs;
use crate::config::{FileConfig, build_write_options};
use crate::error::Result;
use pdbio::core::io::options::ReadOptions;
use pdbio::workflows::convert::{self, ConvertConfig, ConvertSummary};
use tracing::{debug, info};

pub fn run(args: ConvertArgs, read_options: ReadOptions, file_config: &FileConfig) -> Result<()> {
    let write_options = build_write_options(&args, file_config);
    debug!("Resolved write options: {:?}", write_options);

    let config = ConvertConfig {
        read: read_options,
        write: write_options,
    };
    let summary = convert::run(&args.input, &args.output, &config)?;
    info!("Wrote {}.", args.output.display());

    println!("{}", describe(&summary));
    Ok(())
}

fn describe(summary: &ConvertSummary) -> String {
    let mut parts = vec![format!("{} atoms", summary.atoms_written)];
    if summary.bonds_written > 0 {
        parts.push(format!("{} disulfide bonds", summary.bonds_written));
    }
    if summary.symmetries_written > 0 {
        parts.push(format!("{} symmetry entries", summary.symmetries_written));
    }
    if summary.matrices_written > 0 {
        parts.push(format!("{} transform matrices", summary.matrices_written));
    }
    if summary.crystal_written {
        parts.push("unit cell".to_string());
    }

    let mut text = format!("Wrote {}.", parts.join(", "));
    if summary.report.has_warnings() {
        text.push_str(&format!(
            " {} input issue(s) were recovered from.",
            summary.report.warnings.len()
        ));
    }
    text
}
