use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};
use pixelsmith_core::Operation;

use crate::config::ConfigOverrides;
use crate::dump::DumpFormat;

#[derive(Debug, Parser)]
#[command(author, version, about = "Apply simple pixel effects to an image")]
pub struct Cli {
    /// JSON config file layered over the built-in defaults
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Image to load
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Where transformed images are written; the extension picks the format
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// JPEG encoder quality
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Log filter directive, e.g. `info` or `pixelsmith_core=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            jpeg_quality: self.quality,
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive numbered menu (the default)
    Menu,

    /// Run one operation and write the result to the output path
    Apply(ApplyArgs),

    /// Print every pixel of the input image
    Dump(DumpArgs),

    /// List the available operations
    List,
}

#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Operation name, see `pixelsmith list`
    pub operation: Operation,

    /// Brightness percent, rotation degrees or pixelate block size
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct DumpArgs {
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_apply_parses_negative_values() {
        let cli = Cli::try_parse_from(["pixelsmith", "apply", "brightness", "--value", "-40"])
            .unwrap();
        match cli.command {
            Some(Command::Apply(args)) => {
                assert_eq!(args.operation, Operation::Brightness);
                assert_eq!(args.value, Some(-40.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_become_overrides() {
        let cli = Cli::try_parse_from(["pixelsmith", "-i", "a.png", "list", "--quality", "70"])
            .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.input, Some(PathBuf::from("a.png")));
        assert_eq!(overrides.jpeg_quality, Some(70));
        assert!(overrides.output.is_none());
    }

    #[test]
    fn test_quality_range_is_enforced() {
        assert!(Cli::try_parse_from(["pixelsmith", "--quality", "0"]).is_err());
        assert!(Cli::try_parse_from(["pixelsmith", "--quality", "101"]).is_err());
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        assert!(Cli::try_parse_from(["pixelsmith", "apply", "sharpen"]).is_err());
    }
}
