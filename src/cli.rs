//! CLI argument parsing and conversion into library types.

pub use crate::cli_args::*;

use crate::config::{
    ConfigOverrides, ContrastOverrides, LoggingOverrides, OutputFormat, OutputOverrides,
    SearchOverrides,
};
use crate::variant::Direction;
use crate::wcag::Level;

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Aa => Level::Aa,
            LevelArg::Aaa => Level::Aaa,
        }
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Lighten => Direction::Lighten,
            DirectionArg::Darken => Direction::Darken,
        }
    }
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl RequirementArgs {
    fn overrides(&self) -> ContrastOverrides {
        ContrastOverrides {
            level: self.level.map(Into::into),
            // An absent flag must not clobber `large_text = true` from a file
            large_text: self.large_text.then_some(true),
        }
    }
}

impl Cli {
    /// Convert explicitly-set command flags into sparse config overrides.
    ///
    /// Only flags present on the command line are included, so TOML and
    /// environment settings survive for everything else.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            logging: LoggingOverrides {
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
            ..Default::default()
        };

        match &self.command {
            Some(Command::Check { requirements, .. }) => {
                overrides.contrast = requirements.overrides();
            }
            Some(Command::Variant {
                requirements, step, ..
            }) => {
                overrides.contrast = requirements.overrides();
                overrides.search = SearchOverrides { step: *step };
            }
            Some(Command::Palette {
                requirements,
                step,
                format,
                ..
            }) => {
                overrides.contrast = requirements.overrides();
                overrides.search = SearchOverrides { step: *step };
                overrides.output = OutputOverrides {
                    format: format.map(Into::into),
                };
            }
            Some(Command::Contrast { format, .. }) | Some(Command::Convert { format, .. }) => {
                overrides.output = OutputOverrides {
                    format: format.map(Into::into),
                };
            }
            Some(Command::Lighten { .. }) | Some(Command::Darken { .. }) | None => {}
        }

        overrides
    }
}
