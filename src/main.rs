//! CLI entry point for accessible-shades.

use std::path::Path;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};
use serde::Serialize;
use tracing::info;

use accessible_shades::cli::{Cli, Command};
use accessible_shades::config::{AppConfig, OutputFormat};
use accessible_shades::convert::{darken_color, hex_to_hsl, hex_to_rgb, lighten_color, rgb_to_hex};
use accessible_shades::generate::{PaletteRequest, generate_extended_palette, generate_palettes};
use accessible_shades::logging::init_logging;
use accessible_shades::variant::{VariantRequest, WcagAcceptance, find_accessible_variant_with};
use accessible_shades::wcag::ContrastReport;

/// Color shown by the `convert` command.
#[derive(Serialize)]
struct ColorInfo {
    hex: String,
    rgb: [u8; 3],
    hsl: HslInfo,
}

#[derive(Serialize)]
struct HslInfo {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "accessible-shades",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    if let Some(ref path) = cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    let config = AppConfig::resolve(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    let _guard = init_logging(&config.logging).wrap_err("Failed to open log file")?;
    info!(
        level = %config.contrast.level,
        large_text = config.contrast.large_text,
        step = config.search.step,
        "configuration resolved"
    );

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Wrote config to {}", path.display());
    }

    let Some(command) = cli.command else {
        if cli.save_config.is_some() {
            return Ok(());
        }
        bail!("No command given (see --help)");
    };

    let requirements = config.requirements();
    let format = config.output.format;

    match command {
        Command::Contrast {
            foreground,
            background,
            ..
        } => {
            let report = ContrastReport::new(&foreground, &background)?;
            print!("{}", render(&report, format)?);
        }
        Command::Check {
            foreground,
            background,
            ..
        } => {
            let report = ContrastReport::new(&foreground, &background)?;
            let passed = report.passes(requirements);
            let verdict = if passed { "PASS" } else { "FAIL" };
            let size = if requirements.is_large_text { "large" } else { "normal" };
            println!(
                "{verdict}: {foreground} on {background} = {:.2}:1 \
                 (requires {:.1}:1 for {} {size} text)",
                report.ratio,
                requirements.threshold(),
                requirements.level,
            );
            if !passed {
                bail!("Contrast check failed");
            }
        }
        Command::Convert { color, .. } => {
            let rgb = hex_to_rgb(&color)?;
            let hsl = hex_to_hsl(&color)?;
            let info = ColorInfo {
                hex: rgb_to_hex(rgb),
                rgb: [rgb.red, rgb.green, rgb.blue],
                hsl: HslInfo {
                    hue: hsl.hue_degrees(),
                    saturation: hsl.saturation,
                    lightness: hsl.lightness,
                },
            };
            print!("{}", render(&info, format)?);
        }
        Command::Lighten { color, factor } => println!("{}", lighten_color(&color, factor)?),
        Command::Darken { color, factor } => println!("{}", darken_color(&color, factor)?),
        Command::Variant {
            color, direction, ..
        } => {
            let request = VariantRequest::new(color, requirements, direction.into());
            let variant =
                find_accessible_variant_with(&request, &config.search_options(), &WcagAcceptance)?;
            println!("{variant}");
        }
        Command::Palette {
            colors,
            output,
            extended,
            ..
        } => {
            let requests: Vec<PaletteRequest> = colors
                .iter()
                .map(|c| PaletteRequest::new(c.clone(), requirements))
                .collect();
            let options = config.search_options();

            let text = if extended {
                let palettes = requests
                    .iter()
                    .map(|request| generate_extended_palette(request, &options))
                    .collect::<Result<Vec<_>, _>>()?;
                render_palettes(&palettes, format)?
            } else {
                let palettes = generate_palettes(&requests, &options)
                    .into_iter()
                    .collect::<Result<Vec<_>, _>>()?;
                render_palettes(&palettes, format)?
            };

            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

/// Serialize a value in the configured format.
fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).wrap_err("Failed to serialize to YAML"),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .wrap_err("Failed to serialize to JSON"),
    }
}

/// A single palette renders bare, several as a list.
fn render_palettes<T: Serialize>(palettes: &[T], format: OutputFormat) -> Result<String> {
    match palettes {
        [single] => render(single, format),
        _ => render(&palettes, format),
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Wrote palette to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

