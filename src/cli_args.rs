//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// Minimum contrast (4.5:1 normal text, 3:1 large text)
    #[default]
    #[value(name = "AA", alias = "aa")]
    Aa,
    /// Enhanced contrast (7:1 normal text, 3:1 large text)
    #[value(name = "AAA", alias = "aaa")]
    Aaa,
}

/// Search direction along the lightness axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Search lighter shades, falling back to white
    Lighten,
    /// Search darker shades, falling back to black
    Darken,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// YAML format
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// WCAG contrast checking and accessible color variant search.
#[derive(Parser, Debug)]
#[command(name = "accessible-shades")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: accessible-shades.log)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Contrast requirement flags shared by several commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RequirementArgs {
    /// WCAG conformance level (default: AA, or the config file value)
    #[arg(long, value_enum)]
    pub level: Option<LevelArg>,

    /// Judge as large text (18pt, or 14pt bold)
    #[arg(long)]
    pub large_text: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the contrast ratio and every WCAG verdict for a pair
    Contrast {
        /// Foreground color (#RRGGBB)
        foreground: String,
        /// Background color (#RRGGBB)
        background: String,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
    },

    /// Check a pair against one level; exits non-zero on failure
    Check {
        /// Foreground color (#RRGGBB)
        foreground: String,
        /// Background color (#RRGGBB)
        background: String,
        #[command(flatten)]
        requirements: RequirementArgs,
    },

    /// Show a color as normalized hex, RGB and HSL
    Convert {
        /// Color (#RRGGBB)
        color: String,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
    },

    /// Raise HSL lightness by a factor
    Lighten {
        /// Color (#RRGGBB)
        color: String,
        /// Lightness to add (0.0-1.0)
        #[arg(default_value_t = 0.2)]
        factor: f64,
    },

    /// Lower HSL lightness by a factor
    Darken {
        /// Color (#RRGGBB)
        color: String,
        /// Lightness to remove (0.0-1.0)
        #[arg(default_value_t = 0.2)]
        factor: f64,
    },

    /// Find the nearest accessible variant in one direction
    Variant {
        /// Base color (#RRGGBB)
        color: String,
        /// Search direction
        #[arg(short, long, value_enum)]
        direction: DirectionArg,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Lightness step between candidates (default: 0.05)
        #[arg(long)]
        step: Option<f64>,
    },

    /// Generate base/lighter/darker palettes for one or more colors
    Palette {
        /// Base colors (#RRGGBB)
        #[arg(required = true)]
        colors: Vec<String>,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Lightness step between candidates (default: 0.05)
        #[arg(long)]
        step: Option<f64>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Use two variants from one side when the other side has none
        #[arg(long)]
        extended: bool,
    },
}
