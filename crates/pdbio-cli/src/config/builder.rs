use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::{ConvertArgs, RecordSelection};
use crate::error::{CliError, Result};
use pdbio::core::io::options::{ReadOptions, Strictness, WriteOptions};

/// Resolves read options from defaults, the config file and the `--strict` flag,
/// in increasing order of precedence.
pub fn build_read_options(strict_flag: bool, file_config: &FileConfig) -> Result<ReadOptions> {
    let defaults = DefaultsConfig::default();

    let file_strictness = file_config
        .read
        .as_ref()
        .and_then(|r| r.strictness.as_deref())
        .map(|s| {
            s.parse::<Strictness>().map_err(|_| {
                CliError::Config(format!(
                    "Invalid value '{}' for 'read.strictness'. Expected 'lenient' or 'strict'.",
                    s
                ))
            })
        })
        .transpose()?;

    let strictness = if strict_flag {
        Strictness::Strict
    } else {
        file_strictness.unwrap_or(defaults.strictness)
    };

    Ok(ReadOptions::builder().strictness(strictness).build())
}

/// Resolves write options from defaults, the config file and the `convert`
/// arguments. `--complete` or any `--include` replaces the file's selection.
pub fn build_write_options(args: &ConvertArgs, file_config: &FileConfig) -> WriteOptions {
    if args.complete {
        return WriteOptions::complete();
    }

    if !args.include.is_empty() {
        let has = |kind| args.include.contains(&kind);
        return WriteOptions::builder()
            .symmetries(has(RecordSelection::Symmetries))
            .bonds(has(RecordSelection::Bonds))
            .crystal(has(RecordSelection::Crystal))
            .matrices(has(RecordSelection::Matrices))
            .build();
    }

    let defaults = DefaultsConfig::default();
    let write_file = file_config.write.clone().unwrap_or_default();
    WriteOptions::builder()
        .symmetries(write_file.symmetries.unwrap_or(defaults.write_symmetries))
        .bonds(write_file.bonds.unwrap_or(defaults.write_bonds))
        .crystal(write_file.crystal.unwrap_or(defaults.write_crystal))
        .matrices(write_file.matrices.unwrap_or(defaults.write_matrices))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn convert_args(complete: bool, include: Vec<RecordSelection>) -> ConvertArgs {
        ConvertArgs {
            input: PathBuf::from("in.pdb"),
            output: PathBuf::from("out.pdb"),
            complete,
            include,
        }
    }

    fn file(toml: &str) -> FileConfig {
        FileConfig::from_toml_str(toml).unwrap()
    }

    #[test]
    fn read_defaults_to_lenient() {
        let options = build_read_options(false, &FileConfig::default()).unwrap();
        assert_eq!(options.strictness, Strictness::Lenient);
    }

    #[test]
    fn read_uses_file_value_unless_flag_is_set() {
        let config = file("[read]\nstrictness = \"strict\"\n");
        assert!(build_read_options(false, &config).unwrap().is_strict());

        let config = file("[read]\nstrictness = \"lenient\"\n");
        assert!(build_read_options(true, &config).unwrap().is_strict());
    }

    #[test]
    fn read_rejects_unknown_strictness() {
        let config = file("[read]\nstrictness = \"pedantic\"\n");
        let err = build_read_options(false, &config).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn write_defaults_to_atoms_only() {
        let options = build_write_options(&convert_args(false, vec![]), &FileConfig::default());
        assert!(options.is_atoms_only());
    }

    #[test]
    fn write_takes_selection_from_file() {
        let config = file("[write]\nbonds = true\nmatrices = true\n");
        let options = build_write_options(&convert_args(false, vec![]), &config);

        assert!(options.bonds);
        assert!(options.matrices);
        assert!(!options.crystal);
        assert!(!options.symmetries);
    }

    #[test]
    fn include_flags_replace_file_selection() {
        let config = file("[write]\nbonds = true\n");
        let options = build_write_options(
            &convert_args(false, vec![RecordSelection::Crystal]),
            &config,
        );

        assert!(options.crystal);
        assert!(!options.bonds);
    }

    #[test]
    fn complete_flag_enables_everything() {
        let options = build_write_options(&convert_args(true, vec![]), &FileConfig::default());
        assert_eq!(options, WriteOptions::complete());
    }
}
