// SPDX-License-Identifier: MIT
//
// hueforge: generate accessible design-system themes from the command line.
//
// The binary is a thin shell over the two library crates:
//
//   hue-color → color parsing (for --from)
//   hue-theme → generation, validation, CSS/JSON serialization
//
// Flow:
//
//   argv → Cli (clap) → Options → generate (one theme, N variations, or a pair)
//        → render (css | plugin | json) → stdout
//        → validate (optional) → report on stderr, exit 1 on violations
//
// Exit codes: 0 success, 1 output failure or failed validation, 2 usage.

use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use hue_color::{Color, ColorError};
use hue_theme::{
    ColorPalette, GenerationOptions, Theme, generate_random_theme_with,
    generate_theme_pair_with, generate_theme_variations_with, validate_theme,
};
use rand::Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) => e.exit_code(),
            Self::Json(_) | Self::Io(_) => 1,
        }
    }
}

// ─── Options ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Format {
    /// Inline custom properties, one comment-headed block per theme
    #[default]
    Css,
    /// daisyUI `@plugin "daisyui/theme"` blocks
    Plugin,
    /// Flat JSON objects keyed by CSS variable
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "hueforge",
    about = "Generate an accessible theme and print it",
    version,
    after_help = "environment:\n  HUEFORGE_LOG    tracing filter (default: warn)"
)]
struct Cli {
    /// Force a dark theme
    #[arg(long)]
    dark: bool,

    /// Force a light theme (--dark wins if both are given)
    #[arg(long)]
    light: bool,

    /// Fix the primary hue, in degrees
    #[arg(long, value_name = "DEG", value_parser = parse_hue, allow_negative_numbers = true)]
    hue: Option<f32>,

    /// Take the primary hue from a hex or oklch() color
    #[arg(long, value_name = "COLOR", value_parser = hue_of_color, conflicts_with = "hue")]
    from: Option<f32>,

    /// Generate N themes with hues spread around the wheel
    #[arg(long, value_name = "N", conflicts_with = "pair")]
    variations: Option<usize>,

    /// Generate a light and a dark theme at one hue
    #[arg(long)]
    pair: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Check every pair's contrast and report on stderr
    #[arg(long)]
    validate: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Options {
    generation: GenerationOptions,
    variations: Option<usize>,
    pair: bool,
    format: Format,
    validate: bool,
}

impl Options {
    /// Parse a full argument list, program name first.
    fn parse_from<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from(Cli::try_parse_from(args)?))
    }
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Self {
            generation: GenerationOptions {
                force_dark_theme: cli.dark,
                force_light_theme: cli.light,
                fixed_hue: cli.hue.or(cli.from),
            },
            variations: cli.variations,
            pair: cli.pair,
            format: cli.format,
            validate: cli.validate,
        }
    }
}

fn parse_hue(value: &str) -> Result<f32, String> {
    let hue: f32 = value
        .trim_end_matches("deg")
        .parse()
        .map_err(|_| "not a number".to_owned())?;
    if hue.is_finite() { Ok(hue) } else { Err("not finite".to_owned()) }
}

fn hue_of_color(value: &str) -> Result<f32, ColorError> {
    Color::parse(value).map(|c| c.h)
}

// ─── Generation and output ──────────────────────────────────────────────────

fn generate<R: Rng + ?Sized>(rng: &mut R, opts: &Options) -> Vec<Theme> {
    let palette = ColorPalette::material();
    if opts.pair {
        let pair = generate_theme_pair_with(rng, &palette, &opts.generation);
        vec![pair.light, pair.dark]
    } else if let Some(count) = opts.variations {
        generate_theme_variations_with(rng, &palette, count, &opts.generation)
    } else {
        vec![generate_random_theme_with(rng, &palette, &opts.generation)]
    }
}

fn render(themes: &[Theme], format: Format) -> Result<String, CliError> {
    let out = match format {
        Format::Css => themes
            .iter()
            .map(|t| format!("/* {} ({}) */\n{}\n", t.name, t.color_scheme, t.to_css()))
            .collect(),
        Format::Plugin => {
            // The first light theme is the default; the first dark one is
            // preferred under prefers-color-scheme: dark.
            let default = themes.iter().position(|t| !t.color_scheme.is_dark());
            let prefers = themes.iter().position(|t| t.color_scheme.is_dark());
            themes
                .iter()
                .enumerate()
                .map(|(i, t)| t.to_plugin_css(default == Some(i), prefers == Some(i)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Format::Json => {
            let mut json = match themes {
                [single] => serde_json::to_string_pretty(single)?,
                many => serde_json::to_string_pretty(many)?,
            };
            json.push('\n');
            json
        }
    };
    Ok(out)
}

/// Print validation results to `err`. Returns whether every theme passed.
fn report<W: Write>(themes: &[Theme], err: &mut W) -> Result<bool, CliError> {
    let mut all_valid = true;
    for theme in themes {
        let result = validate_theme(theme);
        if result.is_valid {
            writeln!(err, "{}: ok ({} pairs)", theme.name, result.wcag_results.len())?;
        } else {
            all_valid = false;
            writeln!(err, "{}: {} violation(s)", theme.name, result.violations.len())?;
            for violation in &result.violations {
                writeln!(err, "  {violation}")?;
            }
        }
    }
    Ok(all_valid)
}

fn run<R: Rng + ?Sized, W: Write, E: Write>(
    rng: &mut R,
    opts: &Options,
    out: &mut W,
    err: &mut E,
) -> Result<bool, CliError> {
    let themes = generate(rng, opts);
    debug!(count = themes.len(), format = ?opts.format, "rendering themes");

    out.write_all(render(&themes, opts.format)?.as_bytes())?;
    out.flush()?;

    if opts.validate { report(&themes, err) } else { Ok(true) }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("HUEFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    init_logging();

    let opts = Options::parse_from(std::env::args_os()).unwrap_or_else(|e| match e {
        // Help and version land here too; clap prints them and picks the code.
        CliError::Usage(e) => e.exit(),
        e => {
            eprintln!("hueforge: {e}");
            process::exit(e.exit_code());
        }
    });

    match run(&mut rand::rng(), &opts, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("hueforge: {e}");
            process::exit(e.exit_code());
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
