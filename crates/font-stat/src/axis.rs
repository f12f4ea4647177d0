//! Declarative axis definitions for STAT tables.
//!
//! Everything here is `const`-constructible so axis tables can live in
//! `static` items.

use std::collections::HashSet;

use font_types::Tag;
pub use write_fonts::tables::stat::AxisValueTableFlags;

use crate::error::{Error, Result};

/// Where an axis value sits on its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisLocation {
    /// A single stop on the axis.
    Discrete { value: f64 },
    /// A range of the axis with a representative point.
    Range { nominal: f64, min: f64, max: f64 },
}

/// A named stop or range on a design axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisValueDef {
    /// Display name (e.g. "Bold").
    pub name: &'static str,
    pub location: AxisLocation,
    pub flags: AxisValueTableFlags,
    /// Style-linked counterpart (e.g. Regular -> Bold).
    pub linked_value: Option<f64>,
}

impl AxisValueDef {
    /// A single stop at `value`.
    pub const fn discrete(name: &'static str, value: f64) -> Self {
        Self {
            name,
            location: AxisLocation::Discrete { value },
            flags: AxisValueTableFlags::empty(),
            linked_value: None,
        }
    }

    /// A range `min..=max` represented by `nominal`.
    pub const fn range(name: &'static str, nominal: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            location: AxisLocation::Range { nominal, min, max },
            flags: AxisValueTableFlags::empty(),
            linked_value: None,
        }
    }

    /// Mark this value as the axis default whose name may be elided.
    pub const fn elidable(mut self) -> Self {
        self.flags = AxisValueTableFlags::from_bits_truncate(
            self.flags.bits() | AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME.bits(),
        );
        self
    }

    /// Link this value to `value` for style linking.
    pub const fn linked(mut self, value: f64) -> Self {
        self.linked_value = Some(value);
        self
    }

    pub const fn is_elidable(&self) -> bool {
        self.flags.contains(AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME)
    }

    /// The STAT axis value table format this definition compiles to.
    ///
    /// Ranges always use format 2, which has no room for a linked value.
    pub const fn format(&self) -> u16 {
        match (self.location, self.linked_value) {
            (AxisLocation::Range { .. }, _) => 2,
            (AxisLocation::Discrete { .. }, Some(_)) => 3,
            (AxisLocation::Discrete { .. }, None) => 1,
        }
    }
}

/// A design axis and its named values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDef {
    pub tag: Tag,
    /// Display name (e.g. "Weight").
    pub name: &'static str,
    /// Sort rank used when composing style names.
    pub ordering: u16,
    pub values: &'static [AxisValueDef],
}

impl AxisDef {
    pub const fn new(
        tag: &[u8; 4],
        name: &'static str,
        ordering: u16,
        values: &'static [AxisValueDef],
    ) -> Self {
        Self { tag: Tag::new(tag), name, ordering, values }
    }
}

/// Check that a set of axes can be compiled into a STAT table.
///
/// At least one axis is required, tags and orderings must be unique, and
/// every range must contain its nominal value.
pub fn validate(axes: &[AxisDef]) -> Result<()> {
    if axes.is_empty() {
        return Err(Error::InvalidAxes("no axes".into()));
    }

    let mut tags = HashSet::new();
    let mut orderings = HashSet::new();

    for axis in axes {
        if !tags.insert(axis.tag) {
            return Err(Error::InvalidAxes(format!("duplicate axis tag '{}'", axis.tag)));
        }
        if !orderings.insert(axis.ordering) {
            return Err(Error::InvalidAxes(format!(
                "axis '{}' reuses ordering {}",
                axis.tag, axis.ordering
            )));
        }
        for value in axis.values {
            if let AxisLocation::Range { nominal, min, max } = value.location
                && !(min <= nominal && nominal <= max)
            {
                return Err(Error::InvalidAxes(format!(
                    "value '{}' on axis '{}' has nominal {nominal} outside {min}..={max}",
                    value.name, axis.tag
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHT_VALUES: &[AxisValueDef] = &[
        AxisValueDef::range("Regular", 400.0, 350.0, 450.0).elidable().linked(700.0),
        AxisValueDef::range("Bold", 700.0, 650.0, 750.0),
    ];
    const ITALIC_VALUES: &[AxisValueDef] = &[AxisValueDef::discrete("Roman", 0.0).elidable().linked(1.0)];
    const WIDTH_VALUES: &[AxisValueDef] = &[AxisValueDef::discrete("Normal", 100.0).elidable()];
    const BAD_RANGE: &[AxisValueDef] = &[AxisValueDef::range("Thin", 100.0, 150.0, 250.0)];

    #[test]
    fn builders_set_flags_and_links() {
        let regular = WEIGHT_VALUES[0];
        assert!(regular.is_elidable());
        assert_eq!(regular.linked_value, Some(700.0));
        assert!(!WEIGHT_VALUES[1].is_elidable());
        assert_eq!(regular.flags.bits(), 0x2);
    }

    #[test]
    fn format_selection() {
        assert_eq!(WEIGHT_VALUES[0].format(), 2);
        assert_eq!(ITALIC_VALUES[0].format(), 3);
        assert_eq!(WIDTH_VALUES[0].format(), 1);
    }

    #[test]
    fn valid_axes_pass() {
        let axes = [
            AxisDef::new(b"wdth", "Width", 0, WIDTH_VALUES),
            AxisDef::new(b"wght", "Weight", 1, WEIGHT_VALUES),
            AxisDef::new(b"ital", "Italic", 2, ITALIC_VALUES),
        ];
        assert!(validate(&axes).is_ok());
    }

    #[test]
    fn empty_axes_are_rejected() {
        assert!(matches!(validate(&[]), Err(Error::InvalidAxes(_))));
    }

    #[test]
    fn duplicate_tag_is_rejected() {
        let axes = [
            AxisDef::new(b"wght", "Weight", 0, WEIGHT_VALUES),
            AxisDef::new(b"wght", "Weight", 1, WEIGHT_VALUES),
        ];
        assert!(matches!(validate(&axes), Err(Error::InvalidAxes(_))));
    }

    #[test]
    fn duplicate_ordering_is_rejected() {
        let axes = [
            AxisDef::new(b"wdth", "Width", 0, WIDTH_VALUES),
            AxisDef::new(b"wght", "Weight", 0, WEIGHT_VALUES),
        ];
        assert!(matches!(validate(&axes), Err(Error::InvalidAxes(_))));
    }

    #[test]
    fn nominal_outside_range_is_rejected() {
        let axes = [AxisDef::new(b"wght", "Weight", 0, BAD_RANGE)];
        let err = validate(&axes).unwrap_err();
        assert!(err.to_string().contains("Thin"));
    }
}
