//! PostScript naming for named instances.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use read_fonts::{TableProvider, types::NameId};
use sofia_font_ops::{NameTable, Platform, rewrite_font};
use write_fonts::{from_obj::ToOwnedTable, tables::fvar::Fvar};

/// Instance PostScript names get font-specific name IDs.
const POSTSCRIPT_NAME_MIN_ID: u16 = 256;

/// Upright or italic member of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Roman,
    Italic,
}

impl FontStyle {
    /// Classify a font by its path: anything containing "Italic" is italic.
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().contains("Italic") { Self::Italic } else { Self::Roman }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Roman => "Roman",
            Self::Italic => "Italic",
        }
    }
}

/// PostScript family name: the family with whitespace removed, then the style.
pub fn postscript_family_name(family: &str, style: FontStyle) -> String {
    let compact: String = family.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{compact}{}", style.suffix())
}

/// PostScript name of a named instance, e.g. `SofiaSansItalic-Bold` for
/// "Bold Italic". A subfamily that is only "Italic" becomes `Regular`.
pub fn instance_postscript_name(postscript_family: &str, subfamily: &str) -> String {
    let style = subfamily.replace("Italic", "");
    let style = match style.trim() {
        "" => "Regular",
        s => s,
    };
    format!("{postscript_family}-{style}")
}

/// Typographic family name, falling back to the legacy family name.
fn family_name(names: &NameTable) -> Option<String> {
    names
        .get(NameId::TYPOGRAPHIC_FAMILY_NAME, Platform::WINDOWS_ENGLISH)
        .or_else(|| names.get(NameId::FAMILY_NAME, Platform::WINDOWS_ENGLISH))
        .map(str::to_string)
}

/// Set the variations PostScript name prefix (name ID 25) and give every
/// named instance in `fvar` a PostScript name derived from its subfamily.
pub fn update_instance_names(data: &[u8], style: FontStyle) -> Result<Vec<u8>> {
    rewrite_font(data, |font, builder| {
        let mut names = NameTable::from_font(font).context("Failed to read name table")?;

        let family =
            family_name(&names).context("Font has no family name (name ID 16 or 1)")?;
        let postscript_family = postscript_family_name(&family, style);
        names.set(
            NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX,
            Platform::WINDOWS_ENGLISH,
            postscript_family.as_str(),
        );

        let mut fvar: Fvar = font.fvar().context("Font has no fvar table")?.to_owned_table();
        for instance in fvar.axis_instance_arrays.instances.iter_mut() {
            let subfamily_id = instance.subfamily_name_id;
            let subfamily = names
                .get(subfamily_id, Platform::WINDOWS_ENGLISH)
                .with_context(|| {
                    format!("Instance subfamily name ID {} is missing", subfamily_id.to_u16())
                })?
                .to_string();

            let postscript_name = instance_postscript_name(&postscript_family, &subfamily);
            let name_id = names.add_multilingual(&postscript_name, POSTSCRIPT_NAME_MIN_ID)?;
            debug!("{subfamily} -> {postscript_name} (name ID {})", name_id.to_u16());
            instance.post_script_name_id = Some(name_id);
        }

        builder.add_table(&names.build())?;
        builder.add_table(&fvar)?;
        Ok(())
    })
}
