//! Command-line interface for the vmd renderer
//!
//! Provides a CLI to render Markdown (or pass through HTML) files as
//! HTML fragments.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use vmd::core::logging::init_logging;
use vmd::{FrontMatterFormat, FrontMatterMode, RenderOptions, Renderer, SourceKind};

/// vmd - Render Markdown files to HTML
#[derive(Parser)]
#[command(name = "vmd")]
#[command(about = "Render GitHub Flavored Markdown files to HTML fragments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a Markdown file to an HTML fragment
    Render {
        /// Input file (use - for stdin); `.html`/`.htm` files pass through
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the HTML fragment (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How front matter is rendered
        #[arg(long, value_enum, default_value_t = ModeChoice::Table)]
        frontmatter_renderer: ModeChoice,

        /// Comma-separated front matter formats to recognize
        #[arg(long, default_value = "yaml,toml,json")]
        frontmatter_formats: String,
    },

    /// Show supported front matter formats
    Formats {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Front matter render modes exposed on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ModeChoice {
    /// Drop front matter from the output
    None,
    /// Emit the raw front matter as a code block
    Code,
    /// Render parsed front matter as a table
    #[default]
    Table,
}

impl From<ModeChoice> for FrontMatterMode {
    fn from(value: ModeChoice) -> Self {
        match value {
            ModeChoice::None => FrontMatterMode::None,
            ModeChoice::Code => FrontMatterMode::Code,
            ModeChoice::Table => FrontMatterMode::Table,
        }
    }
}

/// Human-readable fence wording for a front matter format
fn fence_description(format: FrontMatterFormat) -> String {
    let (open, close) = format.fences();
    if open == close {
        format!("{} lines", open)
    } else {
        format!("{} and {} lines", open, close)
    }
}

/// Main CLI application
#[derive(Default)]
pub struct VmdApp {
    _private: (),
}

impl VmdApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("VMD_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("VMD_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        // Reinitialize logging with CLI/environment settings
        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("vmd v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                frontmatter_renderer,
                frontmatter_formats,
            } => self.render_command(
                input,
                output,
                frontmatter_renderer,
                &frontmatter_formats,
                cli.verbose,
            ),
            Commands::Formats { json } => self.formats_command(json, cli.verbose),
        }
    }

    /// Handle the render command
    pub fn render_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        mode: ModeChoice,
        formats: &str,
        verbose: bool,
    ) -> Result<()> {
        let options = RenderOptions {
            front_matter_mode: mode.into(),
            front_matter_formats: FrontMatterFormat::parse_list(formats)?,
        };
        let renderer = Renderer::new(options);

        let (content, source_kind) = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let html = match source_kind {
            // HTML sources pass through verbatim, like the viewer
            SourceKind::Html => {
                debug!("Input is HTML, passing through");
                content
            }
            SourceKind::Markdown => renderer.render(&content)?,
        };

        if verbose {
            eprintln!("Rendered {} bytes of HTML", html.len());
        }

        self.write_output(output, &html)?;
        Ok(())
    }

    /// Handle the formats command
    pub fn formats_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported front matter formats");
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&Self::formats_json())?);
        } else {
            println!("Supported front matter formats:");
            for format in FrontMatterFormat::all() {
                println!("  {:<5} - fenced by {}", format.name(), fence_description(*format));
            }
            println!();
            println!("Total: {} formats supported", FrontMatterFormat::all().len());
        }

        Ok(())
    }

    /// JSON payload for `formats --json`, derived from the library's
    /// format registry
    fn formats_json() -> serde_json::Value {
        let formats: Vec<serde_json::Value> = FrontMatterFormat::all()
            .iter()
            .map(|format| {
                let (open, close) = format.fences();
                let fence = if open == close {
                    open.to_string()
                } else {
                    format!("{} {}", open, close)
                };
                serde_json::json!({ "name": format.name(), "fence": fence })
            })
            .collect();

        serde_json::json!({
            "supported_formats": formats,
            "total": FrontMatterFormat::all().len(),
        })
    }

    /// Read input from file or stdin, noting whether it is raw HTML
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<(String, SourceKind)> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    anyhow!("Failed to read input file '{}': {}", path.display(), e)
                })?;
                Ok((content, SourceKind::from_path(&path)))
            }
            // stdin is always treated as Markdown
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok((content, SourceKind::Markdown))
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
