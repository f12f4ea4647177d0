//! Editable copy of the `name` table.

use std::collections::BTreeMap;

use log::debug;
use read_fonts::{
    FontRef, ReadError, TableProvider,
    tables::name::Encoding,
    types::NameId,
};
use write_fonts::tables::name::{Name, NameRecord};

/// Name IDs below this value are reserved by the OpenType spec.
const FIRST_FONT_SPECIFIC_NAME_ID: u16 = 256;

/// Largest name ID a font may define.
const MAX_NAME_ID: u16 = 32767;

/// Returned when every font-specific name ID is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no unused name ID left (name IDs must be at most 32767)")]
pub struct NameIdOverflow;

/// Platform, encoding and language triple identifying a name record's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Platform {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
}

impl Platform {
    /// Windows, Unicode BMP, English (United States).
    pub const WINDOWS_ENGLISH: Self = Self { platform_id: 3, encoding_id: 1, language_id: 0x409 };

    /// Macintosh, Roman, English.
    pub const MAC_ENGLISH: Self = Self { platform_id: 1, encoding_id: 0, language_id: 0 };
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    platform: Platform,
    name_id: NameId,
    string: String,
}

/// An owned, mutable `name` table.
///
/// Records are kept in insertion order while editing and sorted on [`NameTable::build`].
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: Vec<Entry>,
}

impl NameTable {
    /// Copy every decodable record of the font's `name` table.
    ///
    /// Records in encodings other than UTF-16BE and Mac Roman are dropped,
    /// since they could not be written back unchanged.
    pub fn from_font(font: &FontRef) -> Result<Self, ReadError> {
        let name = font.name()?;
        let entries = name
            .name_record()
            .iter()
            .filter_map(|record| {
                if Encoding::new(record.platform_id(), record.encoding_id()) == Encoding::Unknown {
                    debug!(
                        "skipping name ID {} with unsupported encoding ({}, {})",
                        record.name_id().to_u16(),
                        record.platform_id(),
                        record.encoding_id()
                    );
                    return None;
                }
                let string = record.string(name.string_data()).ok()?.chars().collect();
                Some(Entry {
                    platform: Platform {
                        platform_id: record.platform_id(),
                        encoding_id: record.encoding_id(),
                        language_id: record.language_id(),
                    },
                    name_id: record.name_id(),
                    string,
                })
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the string for an exact (name ID, platform) pair.
    pub fn get(&self, name_id: NameId, platform: Platform) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name_id == name_id && e.platform == platform)
            .map(|e| e.string.as_str())
    }

    /// Replace the string of an existing record, or add a new one.
    pub fn set(&mut self, name_id: NameId, platform: Platform, string: impl Into<String>) {
        let string = string.into();
        match self.entries.iter_mut().find(|e| e.name_id == name_id && e.platform == platform) {
            Some(entry) => entry.string = string,
            None => self.entries.push(Entry { platform, name_id, string }),
        }
    }

    /// Find the lowest name ID `>= min_name_id` that carries `string` for both
    /// Windows and Macintosh English.
    pub fn find_multilingual(&self, string: &str, min_name_id: u16) -> Option<NameId> {
        let mut matches: BTreeMap<u16, (bool, bool)> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.string == string) {
            let id = entry.name_id.to_u16();
            if id < min_name_id {
                continue;
            }
            let slot = matches.entry(id).or_default();
            if entry.platform == Platform::WINDOWS_ENGLISH {
                slot.0 = true;
            } else if entry.platform == Platform::MAC_ENGLISH {
                slot.1 = true;
            }
        }
        matches.into_iter().find(|(_, (win, mac))| *win && *mac).map(|(id, _)| NameId::new(id))
    }

    /// Register `string` under a font-specific name ID for Windows and
    /// Macintosh English and return that ID.
    ///
    /// An existing ID with identical strings (at or above `min_name_id`) is
    /// reused, so registering the same string twice does not grow the table.
    pub fn add_multilingual(
        &mut self,
        string: &str,
        min_name_id: u16,
    ) -> Result<NameId, NameIdOverflow> {
        if let Some(existing) = self.find_multilingual(string, min_name_id) {
            debug!("reusing name ID {} for '{string}'", existing.to_u16());
            return Ok(existing);
        }

        let name_id = self.next_unused_name_id()?;
        debug!("adding name ID {} for '{string}'", name_id.to_u16());
        self.entries.push(Entry {
            platform: Platform::WINDOWS_ENGLISH,
            name_id,
            string: string.to_string(),
        });
        self.entries.push(Entry {
            platform: Platform::MAC_ENGLISH,
            name_id,
            string: string.to_string(),
        });
        Ok(name_id)
    }

    fn next_unused_name_id(&self) -> Result<NameId, NameIdOverflow> {
        let highest = self
            .entries
            .iter()
            .map(|e| e.name_id.to_u16())
            .max()
            .unwrap_or(0)
            .max(FIRST_FONT_SPECIFIC_NAME_ID - 1);
        if highest >= MAX_NAME_ID {
            return Err(NameIdOverflow);
        }
        Ok(NameId::new(highest + 1))
    }

    /// Build a `name` table with records in the required sort order.
    pub fn build(&self) -> Name {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by_key(|e| (e.platform, e.name_id.to_u16()));

        let records = entries
            .into_iter()
            .map(|e| {
                NameRecord::new(
                    e.platform.platform_id,
                    e.platform.encoding_id,
                    e.platform.language_id,
                    e.name_id,
                    e.string.clone().into(),
                )
            })
            .collect();
        Name::new(records)
    }
}
