//! Generic font table manipulation utilities.

mod name;

use anyhow::Result;
use read_fonts::{FontRef, types::Tag};
use write_fonts::FontBuilder;

pub use name::{NameIdOverflow, NameTable, Platform};

/// Rewrite font data by applying a transformation function.
///
/// Copies all tables from the source font, then calls `f` to modify or add tables.
/// The function receives a reference to the source font and a mutable builder
/// that already contains all original tables, so adding a table replaces the
/// original one with the same tag.
pub fn rewrite_font(
    data: &[u8],
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
) -> Result<Vec<u8>> {
    let font = FontRef::new(data)?;
    let mut builder = FontBuilder::new();
    copy_tables(&font, &mut builder, &[]);
    f(&font, &mut builder)?;
    Ok(builder.build())
}

/// Copy the raw data of every table in `font` into `builder`, except the
/// tables listed in `skip`.
pub fn copy_tables<'a>(font: &FontRef<'a>, builder: &mut FontBuilder<'a>, skip: &[Tag]) {
    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if skip.contains(&tag) {
            continue;
        }
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }
}
