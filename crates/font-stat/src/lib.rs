//! # STAT table builder
//!
//! Build a STAT (style attributes) table from declarative axis definitions
//! and register the axis and value names in the font's `name` table.
//!
//! ## Example
//!
//! ```no_run
//! use sofia_font_stat::{AxisDef, AxisValueDef, apply_stat};
//!
//! static WEIGHT: &[AxisValueDef] = &[
//!     AxisValueDef::range("Regular", 400.0, 350.0, 450.0).elidable().linked(700.0),
//!     AxisValueDef::range("Bold", 700.0, 650.0, 750.0),
//! ];
//! static AXES: &[AxisDef] = &[AxisDef::new(b"wght", "Weight", 0, WEIGHT)];
//!
//! let data = std::fs::read("Variable.ttf").unwrap();
//! let with_stat = apply_stat(&data, AXES).unwrap();
//! std::fs::write("Variable.ttf", with_stat).unwrap();
//! ```

mod axis;
mod builder;
mod error;

pub use axis::{AxisDef, AxisLocation, AxisValueDef, AxisValueTableFlags, validate};
pub use builder::{ELIDED_FALLBACK_NAME_ID, apply_stat, build_stat};
pub use error::{Error, Result};
