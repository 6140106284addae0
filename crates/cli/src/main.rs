#![deny(unsafe_code)]
//! CLI binary for swatch.
//!
//! Subcommands:
//! - `sheet`: build the swatch sheet for a color count and filter, print it, optionally write a PNG
//! - `transform <hex>...`: run hex colors through a vision filter
//! - `gradient <hex>`: sample a linear or luminance gradient of a base color
//! - `list`: print available filters and schemes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use swatch_core::gradient::{sample, Gradient};
use swatch_core::{transform_colors, ChannelTransform, Color, Filter};
use swatch_core::{LinearGradient, LuminanceGradient};
use swatch_sheet::{Scheme, Sheet, SheetOptions, MAX_COUNT, TOO_MANY_COLOURS};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swatch", about = "Palette swatches through color-vision filters")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug detail to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the swatch sheet and print every row.
    Sheet {
        /// Colors per row (clamped to 1..=100).
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,

        /// Vision filter (deutan, gray, protan, none).
        #[arg(short, long)]
        filter: Option<String>,

        /// Luminance range control for the luminance gradients, in (0, 0.5).
        #[arg(long)]
        low_bound: Option<f64>,

        /// Also write the sheet as a PNG strip image.
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Run hex colors through a vision filter.
    Transform {
        /// Vision filter (deutan, gray, protan, none).
        #[arg(short, long, default_value = "gray")]
        filter: String,

        /// Colors as rrggbb, aarrggbb or #aarrggbb.
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Sample a gradient of a base color.
    Gradient {
        /// Base color as rrggbb, aarrggbb or #aarrggbb.
        base: String,

        /// Number of colors.
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,

        /// Gradient variant (linear, luminance).
        #[arg(long, default_value = "linear")]
        variant: String,

        /// Luminance range control in (0, 0.5); luminance variant only.
        #[arg(long)]
        range: Option<f64>,
    },
    /// List available filters and schemes.
    List,
}

/// Parses a filter key; `none` selects no filter.
fn parse_filter(name: &str) -> Result<Option<Filter>, CliError> {
    match name {
        "none" => Ok(None),
        other => Ok(Some(Filter::from_name(other)?)),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let filters = Filter::list();
            let schemes = Scheme::list();
            if cli.json {
                let info = serde_json::json!({
                    "filters": filters
                        .iter()
                        .map(|f| serde_json::json!({"key": f.key(), "name": f.name()}))
                        .collect::<Vec<_>>(),
                    "schemes": schemes
                        .iter()
                        .map(|s| serde_json::json!({
                            "key": s.key(),
                            "title": s.title(),
                            "label": s.label(),
                        }))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Filters:");
                for f in filters {
                    println!("  {:<8} {}", f.key(), f.name());
                }
                println!("Schemes:");
                for s in schemes {
                    println!("  {:<24} {}", s.key(), s.label());
                }
            }
        }
        Command::Sheet {
            count,
            filter,
            low_bound,
            png,
        } => {
            let options = SheetOptions {
                count,
                filter: filter.as_deref().map(parse_filter).transpose()?.flatten(),
                low_bound,
            };
            debug!(?options, "building sheet");
            let sheet = Sheet::build(&options)?;

            if let Some(path) = &png {
                swatch_sheet::snapshot::write_png(&sheet, path)?;
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            } else {
                for section in &sheet.sections {
                    println!("{}", section.title);
                    for row in &section.rows {
                        println!("  {}", row.title);
                        match &row.colors {
                            Some(colors) => println!("    {}", colors.join(" ")),
                            None => println!("    {TOO_MANY_COLOURS}"),
                        }
                    }
                }
                if let Some(path) = &png {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
        Command::Transform { filter, colors } => {
            let filter = parse_filter(&filter)?;
            let transform = filter.as_ref().map(|f| f as &dyn ChannelTransform);
            let out = transform_colors(&colors, transform)?;

            if cli.json {
                let pairs: Vec<_> = colors
                    .iter()
                    .zip(out.iter())
                    .map(|(input, output)| serde_json::json!({"input": input, "output": output}))
                    .collect();
                let info = serde_json::json!({
                    "filter": filter.map(Filter::key),
                    "colors": pairs,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (input, output) in colors.iter().zip(out.iter()) {
                    println!("{input} -> {output}");
                }
            }
        }
        Command::Gradient {
            base,
            count,
            variant,
            range,
        } => {
            let base_color = Color::from_hex(&base)?;
            let gradient: Box<dyn Gradient> = match (variant.as_str(), range) {
                ("linear", None) => Box::new(LinearGradient::new(base_color)),
                ("linear", Some(_)) => {
                    return Err(CliError::Input(
                        "--range only applies to the luminance variant".into(),
                    ))
                }
                ("luminance", None) => Box::new(LuminanceGradient::new(base_color)),
                ("luminance", Some(r)) => Box::new(LuminanceGradient::with_range(base_color, r)?),
                (other, _) => {
                    return Err(CliError::Input(format!(
                        "unknown gradient variant: {other} (expected linear or luminance)"
                    )))
                }
            };
            let colors: Vec<String> = sample(&*gradient, count.clamp(1, MAX_COUNT), false)
                .into_iter()
                .map(Color::to_hex)
                .collect();

            if cli.json {
                let info = serde_json::json!({
                    "base": base_color,
                    "variant": variant,
                    "colors": colors,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", colors.join(" "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
