//! CLI definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use sofia_core::{config::VARIABLE_DIR, run};

#[derive(Debug, Parser)]
#[command(name = "sofia-stat")]
#[command(about = "Add STAT tables and instance PostScript names to the Sofia Sans variable fonts")]
pub struct Cli {
    /// Directory containing the Sofia Sans variable fonts
    #[arg(long, default_value = VARIABLE_DIR)]
    pub variable_dir: PathBuf,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        debug!("processing fonts in {}", self.variable_dir.display());
        run(&self.variable_dir)
    }
}
