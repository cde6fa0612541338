use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use color_scale_wasm::{
    ColorFormat, DEFAULT_IMAGE_COLOR_COUNT, extract_palette_bytes, format_hsl, format_rgb,
    generate_color_scale, parse_color_entry, text_color_for_background,
};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Generate color scales and extract palettes from images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the 10-step lightness scale for each color
    Scale {
        #[arg(required = true)]
        colors: Vec<String>,

        /// Notation the colors are written in
        #[arg(short, long, default_value_t = ColorFormat::Hex)]
        format: ColorFormat,
    },

    /// Recommend light or dark text for each background color
    Contrast {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Show a color in hex, RGB and HSL notation
    Convert {
        color: String,

        #[arg(short, long, default_value_t = ColorFormat::Hex)]
        format: ColorFormat,
    },

    /// Extract representative colors from one or more images
    Extract {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Number of colors to extract
        #[arg(short = 'k', long, default_value_t = DEFAULT_IMAGE_COLOR_COUNT)]
        n_colors: usize,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Normalize user entry to a hex color, with the input echoed on failure.
fn to_hex(format: ColorFormat, value: &str) -> Result<String> {
    parse_color_entry(format, value).with_context(|| format!("invalid {format} color {value:?}"))
}

fn scale(colors: &[String], format: ColorFormat, as_json: bool) -> Result<Value> {
    let mut out = Vec::with_capacity(colors.len());
    for color in colors {
        let base = to_hex(format, color)?;
        let steps = generate_color_scale(&base);

        if !as_json {
            println!("{base}");
            for (i, step) in steps.iter().enumerate() {
                println!("  {i}  {step}  {}", text_color_for_background(step));
            }
        }
        out.push(json!({ "base": base, "scale": steps }));
    }
    Ok(Value::Array(out))
}

fn contrast(colors: &[String], as_json: bool) -> Value {
    let mut out = Vec::with_capacity(colors.len());
    for color in colors {
        let text = text_color_for_background(color);
        if !as_json {
            println!("{color}  {text}");
        }
        out.push(json!({ "background": color, "text": text.as_str() }));
    }
    Value::Array(out)
}

fn convert(color: &str, format: ColorFormat, as_json: bool) -> Result<Value> {
    let hex = to_hex(format, color)?;
    let rgb = format_rgb(&hex);
    let hsl = format_hsl(&hex);
    if !as_json {
        println!("hex  {hex}");
        println!("rgb  {rgb}");
        println!("hsl  {hsl}");
    }
    Ok(json!({ "hex": hex, "rgb": rgb, "hsl": hsl }))
}

fn extract(inputs: &[PathBuf], n_colors: usize, as_json: bool) -> Result<Value> {
    let mut out = Vec::with_capacity(inputs.len());
    for input in inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        let palette = extract_palette_bytes(&bytes, n_colors)
            .with_context(|| format!("extracting palette from {}", input.display()))?;
        info!(path = %input.display(), colors = palette.len(), "extracted palette");

        if !as_json {
            println!("{}", input.display());
            for color in &palette {
                println!("  {color}");
            }
        }
        out.push(json!({ "path": input.display().to_string(), "palette": palette }));
    }
    Ok(Value::Array(out))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Scale { colors, format } => scale(colors, *format, cli.json)?,
        Command::Contrast { colors } => contrast(colors, cli.json),
        Command::Convert { color, format } => convert(color, *format, cli.json)?,
        Command::Extract { inputs, n_colors } => extract(inputs, *n_colors, cli.json)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
