//! STAT table construction.

use log::{debug, info};
use read_fonts::{
    FontRef,
    types::{Fixed, NameId, Tag},
};
use sofia_font_ops::{NameTable, copy_tables};
use write_fonts::{
    FontBuilder,
    tables::stat::{AxisRecord, AxisValue, Stat},
};

use crate::{
    axis::{AxisDef, AxisLocation, AxisValueDef, validate},
    error::{Error, Result},
};

/// Name shown when every axis value of a face is elidable ("Regular").
pub const ELIDED_FALLBACK_NAME_ID: NameId = NameId::SUBFAMILY_NAME;

/// Axis names always get font-specific IDs.
const AXIS_NAME_MIN_ID: u16 = 256;

/// Value names may reuse any existing ID with matching strings.
const VALUE_NAME_MIN_ID: u16 = 0;

/// Build a STAT table for `axes`, registering axis and value names in `names`.
///
/// Axis records are emitted in slice order and axis values refer to their
/// axis by that position; `ordering` only affects the axis record itself.
pub fn build_stat(axes: &[AxisDef], names: &mut NameTable) -> Result<Stat> {
    validate(axes)?;

    let mut design_axes = Vec::with_capacity(axes.len());
    let mut axis_values = Vec::new();

    for (axis_index, axis) in axes.iter().enumerate() {
        let axis_name_id = names.add_multilingual(axis.name, AXIS_NAME_MIN_ID)?;
        design_axes.push(AxisRecord::new(axis.tag, axis_name_id, axis.ordering));

        for value in axis.values {
            let value_name_id = names.add_multilingual(value.name, VALUE_NAME_MIN_ID)?;
            axis_values.push(axis_value(axis_index as u16, axis, value, value_name_id));
        }
    }

    info!("Built STAT table with {} axes and {} values", design_axes.len(), axis_values.len());
    Ok(Stat::new(design_axes, axis_values, ELIDED_FALLBACK_NAME_ID))
}

fn axis_value(axis_index: u16, axis: &AxisDef, value: &AxisValueDef, name_id: NameId) -> AxisValue {
    match (value.location, value.linked_value) {
        (AxisLocation::Discrete { value: v }, None) => {
            AxisValue::format_1(axis_index, value.flags, name_id, Fixed::from_f64(v))
        }
        (AxisLocation::Discrete { value: v }, Some(linked)) => AxisValue::format_3(
            axis_index,
            value.flags,
            name_id,
            Fixed::from_f64(v),
            Fixed::from_f64(linked),
        ),
        (AxisLocation::Range { nominal, min, max }, linked) => {
            if let Some(linked) = linked {
                debug!(
                    "{}: dropping linked value {linked} of range value '{}'",
                    axis.tag, value.name
                );
            }
            AxisValue::format_2(
                axis_index,
                value.flags,
                name_id,
                Fixed::from_f64(nominal),
                Fixed::from_f64(min),
                Fixed::from_f64(max),
            )
        }
    }
}

/// Replace the font's STAT table with one built from `axes`.
///
/// The font's `name` table gains any axis and value names it does not
/// already carry. All other tables are copied unchanged.
pub fn apply_stat(data: &[u8], axes: &[AxisDef]) -> Result<Vec<u8>> {
    let font = FontRef::new(data)?;
    if font.table_data(Tag::new(b"name")).is_none() {
        return Err(Error::MissingTable { table: "name" });
    }

    let mut names = NameTable::from_font(&font)?;
    let stat = build_stat(axes, &mut names)?;

    let mut builder = FontBuilder::new();
    copy_tables(&font, &mut builder, &[Tag::new(b"STAT"), Tag::new(b"name")]);
    builder.add_table(&stat)?;
    builder.add_table(&names.build())?;

    Ok(builder.build())
}
