//! Command-line argument parsing for the scribe.

use clap::Parser;
use quote_scribe::config::Config;
use std::path::PathBuf;

/// A chat bot that keeps a quotebook and draws quote cards.
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quotebook JSON file (overrides storage.quotebook)
    #[arg(long, value_name = "PATH")]
    pub quotebook: Option<PathBuf>,

    /// Directory of card backgrounds (overrides render.backgrounds)
    #[arg(long, value_name = "DIR")]
    pub backgrounds: Option<PathBuf>,

    /// Font file for cards (overrides render.font)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Sender name for console lines without a `name:` prefix
    #[arg(long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Append quotes from a legacy `"text" - author date` file, then exit
    #[arg(long, value_name = "PATH")]
    pub import_legacy: Option<PathBuf>,

    /// Send quotes as plain text instead of cards
    #[arg(long)]
    pub no_cards: bool,

    /// Write logs to the state directory instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, using the default if not specified.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Applies flag overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.quotebook {
            config.storage.quotebook = path.clone();
        }
        if let Some(dir) = &self.backgrounds {
            config.render.backgrounds = dir.clone();
        }
        if let Some(font) = &self.font {
            config.render.font = Some(font.clone());
        }
        if let Some(sender) = &self.sender {
            config.console.sender = sender.clone();
        }
    }
}
