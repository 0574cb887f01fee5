//! Command line flags, parsed with clap.

use clap::Parser;
use log::LevelFilter;

use crate::render::RenderOptions;

/// Interactive Binary Search Tree: insert, delete and display integer keys
/// from a console menu.
#[derive(Parser, Debug, Clone)]
#[clap(version)]
pub struct Config {
    /// Log verbosity (off, error, warn, info, debug, trace). Logs go to stderr.
    #[clap(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Spaces per level in the arrow-annotated structure display.
    #[clap(long, default_value = "4")]
    pub indent: usize,

    /// Spaces per level in the graphical display.
    #[clap(long, default_value = "10")]
    pub spacing: usize,
}

impl Config {
    /// The rendering layout selected on the command line.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent,
            spacing: self.spacing,
        }
    }
}
