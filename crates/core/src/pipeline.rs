//! STAT and naming pass over the Sofia Sans variable fonts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use sofia_font_stat::{AxisDef, apply_stat};

use crate::{
    axes::{ITALIC_AXES, UPRIGHT_AXES},
    config::{ITALIC_FILENAME, STAT_LOG_PREFIX, UPRIGHT_FILENAME},
    naming::{FontStyle, update_instance_names},
};

/// A font file and the axis table it receives.
#[derive(Debug, Clone)]
pub struct FontTarget {
    pub path: PathBuf,
    pub axes: &'static [AxisDef],
}

impl FontTarget {
    pub fn new(path: impl Into<PathBuf>, axes: &'static [AxisDef]) -> Self {
        Self { path: path.into(), axes }
    }

    pub fn style(&self) -> FontStyle {
        FontStyle::from_path(&self.path)
    }

    /// Add this target's STAT table and instance PostScript names to `data`.
    pub fn rewrite(&self, data: &[u8]) -> Result<Vec<u8>> {
        let with_stat = apply_stat(data, self.axes).context("Failed to build STAT table")?;
        update_instance_names(&with_stat, self.style())
    }
}

/// The upright and italic fonts in `variable_dir`, in processing order.
pub fn sofia_targets(variable_dir: &Path) -> [FontTarget; 2] {
    [
        FontTarget::new(variable_dir.join(UPRIGHT_FILENAME), UPRIGHT_AXES),
        FontTarget::new(variable_dir.join(ITALIC_FILENAME), ITALIC_AXES),
    ]
}

/// Build STAT, name the instances, and overwrite the font file.
///
/// Nothing is written unless every in-memory step succeeds.
pub fn process_font(target: &FontTarget) -> Result<()> {
    let style = target.style();
    info!(
        "{}: {} axes, {} style",
        target.path.display(),
        target.axes.len(),
        style.suffix()
    );

    let path = &target.path;
    let data = fs::read(path).with_context(|| format!("Failed to read font: {}", path.display()))?;
    let new_data = target
        .rewrite(&data)
        .with_context(|| format!("Failed to process font: {}", path.display()))?;
    fs::write(path, new_data)
        .with_context(|| format!("Failed to write font: {}", path.display()))?;

    println!("{STAT_LOG_PREFIX} Added STAT table to {}", target.path.display());
    Ok(())
}

/// Process every Sofia Sans variable font in `variable_dir`, stopping at the
/// first failure.
pub fn run(variable_dir: &Path) -> Result<()> {
    for target in sofia_targets(variable_dir) {
        process_font(&target)?;
    }
    Ok(())
}
