// File: crates/ternary-demo/src/cli.rs
// Summary: Command-line arguments and logging setup for the ternary demo.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use ternary_core::{theme, FigureOptions, Layout};

/// Render a ternary diagram from a CSV of three-component compositions.
#[derive(Parser, Debug)]
#[command(name = "ternary-demo")]
#[command(version, long_about = None)]
pub struct Cli {
    /// CSV file with a header row; a built-in sample is plotted when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output PNG (default: target/out/ternary_<input stem>.png)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Label (and column name) of the upper apex
    #[arg(long)]
    pub upper: Option<String>,

    /// Label (and column name) of the left apex
    #[arg(long)]
    pub left: Option<String>,

    /// Label (and column name) of the right apex
    #[arg(long)]
    pub right: Option<String>,

    /// Colour theme: light, dark, solarized-light, solarized-dark
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Figure width in pixels
    #[arg(long, default_value_t = ternary_core::types::WIDTH)]
    pub width: i32,

    /// Figure height in pixels
    #[arg(long, default_value_t = ternary_core::types::HEIGHT)]
    pub height: i32,

    /// Plot layout mode
    #[arg(long, value_enum, default_value = "constrained")]
    pub layout: LayoutArg,

    /// Marker radius in pixels
    #[arg(long, default_value_t = 4.0)]
    pub marker_size: f32,

    /// Join the samples with a line in file order
    #[arg(long)]
    pub connect: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Make room for apex labels
    Constrained,
    /// Small fixed padding
    Tight,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Constrained => Layout::Constrained,
            LayoutArg::Tight => Layout::Tight,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt().with_env_filter(filter).with_target(false).init();
    }

    pub fn figure_options(&self) -> FigureOptions {
        FigureOptions::default()
            .with_size(self.width, self.height)
            .with_theme(theme::find(&self.theme))
            .with_layout(self.layout.into())
    }
}
