//! Command-line front end for markpaste.
//!
//! Usage:
//!   markpaste convert [FILE] [--strict]          - Print the HTML fragment for markdown-ish text
//!   markpaste detect [FILE] [--verbose]          - Print `markdown`, `code` or `text`
//!   markpaste paste [FILE] [--html FILE] [--image] - Print what the editor would do with a paste
//!
//! FILE defaults to stdin. `--config PATH` overrides `~/.config/markpaste/config.toml`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markpaste_config::Config;
use markpaste_engine::{
    Clipboard, CodeDetection, MarkdownOptions, PasteAction, classify_paste, code_score,
    has_markdown_syntax, is_code_like_with, markdown_to_html_with,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "markpaste", version, about = "Turn pasted text into editor-ready HTML")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert markdown-ish text to an HTML fragment
    Convert {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
        /// Escape inline code, link and image text
        #[arg(long)]
        strict: bool,
    },
    /// Report whether text reads as markdown, code or plain text
    Detect {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
        /// Also print the code score
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show how the editor would handle a paste
    Paste {
        /// Plain-text clipboard payload (stdin when omitted)
        file: Option<PathBuf>,
        /// HTML clipboard payload
        #[arg(long)]
        html: Option<PathBuf>,
        /// Pretend the clipboard also holds an image
        #[arg(long)]
        image: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &config, &mut out)
}

/// Loads the config file, falling back to defaults with a warning.
fn load_config(path: Option<&Path>) -> Config {
    let (result, explicit) = match path {
        Some(path) => (Config::load_from_path(Config::expand_path(path)), true),
        None => (Config::load(), false),
    };

    match result {
        Ok(Some(config)) => config,
        Ok(None) => {
            if explicit {
                log::warn!("Config file not found, using defaults");
            } else {
                log::debug!("No config file at {}", Config::config_path().display());
            }
            Config::default()
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    }
}

fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Convert { file, strict } => {
            let input = read_input(file.as_deref())?;
            let options = if strict {
                MarkdownOptions::strict()
            } else {
                config.markdown.clone()
            };
            writeln!(out, "{}", markdown_to_html_with(&input, &options))?;
        }
        Command::Detect { file, verbose } => {
            let input = read_input(file.as_deref())?;
            let kind = detect_kind(&input, &config.code_detection);
            if verbose {
                let score = code_score(&input, &config.code_detection);
                writeln!(out, "{kind} (score {score})")?;
            } else {
                writeln!(out, "{kind}")?;
            }
        }
        Command::Paste { file, html, image } => {
            let clipboard = Clipboard {
                html: html.as_deref().map(read_file).transpose()?,
                text: Some(read_input(file.as_deref())?),
                has_image: image,
            };
            let action = classify_paste(&clipboard, &config.paste_settings());
            writeln!(out, "{}", action.label())?;
            if let PasteAction::InsertHtml(payload) | PasteAction::InsertCodeBlock(payload) =
                action
            {
                writeln!(out, "{payload}")?;
            }
        }
    }
    Ok(())
}

fn detect_kind(text: &str, weights: &CodeDetection) -> &'static str {
    if has_markdown_syntax(text) {
        "markdown"
    } else if is_code_like_with(text, weights) {
        "code"
    } else {
        "text"
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => read_file(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
