// SPDX-License-Identifier: MIT
//
// tint — derive accessible color themes from a single brand color.
//
// This is the command-line front end over the two library crates:
//
//   tint-color → hex parsing, HSL conversion
//   tint-theme → contrast math, palette rules, theme assembly
//
// Subcommands:
//
//   tint derive <BRAND> [--dark | --surface <HEX>] [--format text|json]
//   tint inspect <HEX>
//   tint contrast <A> <B>
//
// Results go to stdout; logs go to stderr (RUST_LOG, or -v/-vv/-vvv).

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tint_color::Rgb;
use tint_theme::contrast::{contrast_ratio, meets_aa, relative_luminance};
use tint_theme::{Derivation, derive_with_report, is_dark};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "tint", version, about = "Derive accessible color themes from a brand color")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Derive a 7-role theme from a brand color
    Derive(DeriveArgs),
    /// Show a color's HSL, relative luminance and surface classification
    Inspect {
        /// Color as #RRGGBB
        color: String,
    },
    /// Measure the WCAG contrast ratio between two colors
    Contrast {
        /// First color as #RRGGBB
        a: String,
        /// Second color as #RRGGBB
        b: String,
    },
}

#[derive(Debug, Args)]
struct DeriveArgs {
    /// Brand color as #RRGGBB (leading # optional)
    brand: String,

    /// Use the dark-mode rule set
    #[arg(long, conflicts_with = "surface")]
    dark: bool,

    /// Pick the mode from the surface the theme will sit on
    #[arg(long, value_name = "HEX")]
    surface: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

// ─── Commands ───────────────────────────────────────────────────────────────

impl Command {
    fn run(self, out: &mut impl Write) -> Result<()> {
        match self {
            Self::Derive(args) => args.run(out),
            Self::Inspect { color } => inspect(parse_color(&color, "color")?, out),
            Self::Contrast { a, b } => {
                let a = parse_color(&a, "first color")?;
                let b = parse_color(&b, "second color")?;
                let ratio = contrast_ratio(a, b);
                writeln!(out, "{a} vs {b}: {ratio:.2}:1 ({})", aa_label(meets_aa(ratio)))?;
                Ok(())
            }
        }
    }
}

impl DeriveArgs {
    fn run(self, out: &mut impl Write) -> Result<()> {
        let brand = parse_color(&self.brand, "brand color")?;
        let dark_mode = match self.surface.as_deref() {
            Some(surface) => {
                let surface = parse_color(surface, "surface color")?;
                let dark = is_dark(surface);
                info!(surface = %surface, dark, "mode taken from surface");
                dark
            }
            None => self.dark,
        };

        let derivation = derive_with_report(brand, dark_mode);
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, &derivation.theme)
                    .context("failed to write theme")?;
                writeln!(out)?;
            }
            Format::Text => write_theme(brand, &derivation, out)?,
        }
        Ok(())
    }
}

fn inspect(color: Rgb, out: &mut impl Write) -> Result<()> {
    let hsl = color.to_hsl();
    let surface = if is_dark(color) { "dark" } else { "light" };
    writeln!(out, "{color}")?;
    writeln!(out, "  hsl        {} {}% {}%", hsl.h, hsl.s, hsl.l)?;
    writeln!(out, "  luminance  {:.4}", relative_luminance(color))?;
    writeln!(out, "  surface    {surface}")?;
    Ok(())
}

fn write_theme(brand: Rgb, derivation: &Derivation, out: &mut impl Write) -> Result<()> {
    let theme = &derivation.theme;
    let mode = if theme.is_dark { "dark" } else { "light" };
    writeln!(out, "{} ({mode}) from {brand}", theme.name)?;
    for (role, color) in theme.colors.iter() {
        writeln!(out, "  {:<11} {color}", role.name())?;
    }

    let report = derivation.primary_contrast;
    let verdict = aa_label(report.meets_aa());
    if report.corrected {
        writeln!(
            out,
            "primary contrast {:.2}:1 -> {:.2}:1 after correction ({verdict})",
            report.before, report.after
        )?;
    } else {
        writeln!(out, "primary contrast {:.2}:1 ({verdict})", report.after)?;
    }
    Ok(())
}

const fn aa_label(pass: bool) -> &'static str {
    if pass { "AA pass" } else { "AA fail" }
}

fn parse_color(input: &str, what: &str) -> Result<Rgb> {
    Rgb::parse(input).with_context(|| format!("invalid {what}"))
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    match cli.command.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tint: {err:#}");
            ExitCode::FAILURE
        }
    }
}
