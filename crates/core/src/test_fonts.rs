//! Synthetic fonts and scratch directories for tests.

use std::{fs, path::PathBuf, process};

use read_fonts::types::{Fixed, NameId, Tag};
use write_fonts::{
    FontBuilder,
    tables::{
        fvar::{AxisInstanceArrays, Fvar, InstanceRecord, VariationAxisRecord},
        name::{Name, NameRecord},
    },
};

/// A fresh, empty directory unique to this test and process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sofia-core-{name}-{}", process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A font with a single-axis `fvar` and Windows English names.
///
/// Each instance is given by the name ID of its subfamily name.
pub fn variable_font(names: &[(u16, &str)], instance_name_ids: &[u16]) -> Vec<u8> {
    let records = names
        .iter()
        .map(|(id, s)| NameRecord::new(3, 1, 0x409, NameId::new(*id), s.to_string().into()))
        .collect();

    let axes = vec![VariationAxisRecord {
        axis_tag: Tag::new(b"wght"),
        min_value: Fixed::from_f64(1.0),
        default_value: Fixed::from_f64(400.0),
        max_value: Fixed::from_f64(1000.0),
        flags: 0,
        axis_name_id: NameId::new(256),
    }];
    let instances = instance_name_ids
        .iter()
        .enumerate()
        .map(|(i, id)| InstanceRecord {
            subfamily_name_id: NameId::new(*id),
            flags: 0,
            coordinates: vec![Fixed::from_f64(100.0 * (i + 1) as f64)],
            post_script_name_id: None,
        })
        .collect();
    let fvar = Fvar { axis_instance_arrays: AxisInstanceArrays { axes, instances }.into() };

    let mut builder = FontBuilder::new();
    builder.add_table(&Name::new(records)).unwrap();
    builder.add_table(&fvar).unwrap();
    builder.build()
}

/// The Sofia Sans names used by most tests: family, subfamily, axis name,
/// and three instance subfamilies (IDs 257-259).
pub const SOFIA_NAMES: &[(u16, &str)] = &[
    (1, "Sofia Sans"),
    (2, "Regular"),
    (16, "Sofia Sans"),
    (256, "Weight"),
    (257, "Bold Italic"),
    (258, "Italic"),
    (259, "Light"),
];

pub const SOFIA_INSTANCES: &[u16] = &[257, 258, 259];
