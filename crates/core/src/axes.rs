//! STAT axis tables for the upright and italic Sofia Sans fonts.

use sofia_font_stat::{AxisDef, AxisValueDef};

static WIDTH_VALUES: &[AxisValueDef] = &[
    AxisValueDef::discrete("UltraCondensed", 50.0),
    AxisValueDef::discrete("Condensed", 75.0),
    AxisValueDef::discrete("SemiCondensed", 87.5),
    AxisValueDef::discrete("Normal", 100.0).elidable(),
];

static UPRIGHT_WEIGHT_VALUES: &[AxisValueDef] = &[
    AxisValueDef::range("Hairline", 1.0, 1.0, 50.0),
    AxisValueDef::range("Thin", 100.0, 50.0, 150.0),
    AxisValueDef::range("ExtraLight", 200.0, 150.0, 250.0),
    AxisValueDef::range("Light", 300.0, 250.0, 350.0),
    AxisValueDef::range("Regular", 400.0, 350.0, 450.0).elidable().linked(700.0),
    AxisValueDef::range("Medium", 500.0, 450.0, 550.0),
    AxisValueDef::range("SemiBold", 600.0, 550.0, 650.0),
    AxisValueDef::range("Bold", 700.0, 650.0, 750.0),
    AxisValueDef::range("ExtraBold", 800.0, 750.0, 850.0),
    AxisValueDef::range("Black", 900.0, 850.0, 950.0),
    AxisValueDef::range("ExtraBlack", 1000.0, 950.0, 1000.0),
];

// The italic Medium range overlaps SemiBold; shipped fonts carry it this way.
static ITALIC_WEIGHT_VALUES: &[AxisValueDef] = &[
    AxisValueDef::range("Hairline", 1.0, 1.0, 50.0),
    AxisValueDef::range("Thin", 100.0, 50.0, 150.0),
    AxisValueDef::range("ExtraLight", 200.0, 150.0, 250.0),
    AxisValueDef::range("Light", 300.0, 250.0, 350.0),
    AxisValueDef::range("Regular", 400.0, 350.0, 450.0).elidable().linked(700.0),
    AxisValueDef::range("Medium", 500.0, 450.0, 650.0),
    AxisValueDef::range("SemiBold", 600.0, 550.0, 650.0),
    AxisValueDef::range("Bold", 700.0, 650.0, 750.0),
    AxisValueDef::range("ExtraBold", 800.0, 750.0, 850.0),
    AxisValueDef::range("Black", 900.0, 850.0, 950.0),
    AxisValueDef::range("ExtraBlack", 1000.0, 950.0, 1000.0),
];

static ROMAN_VALUES: &[AxisValueDef] = &[AxisValueDef::discrete("Roman", 0.0).elidable().linked(1.0)];

static ITALIC_VALUES: &[AxisValueDef] = &[AxisValueDef::discrete("Italic", 1.0)];

/// Axes of `SofiaSans[wdth,wght].ttf`.
pub static UPRIGHT_AXES: &[AxisDef] = &[
    AxisDef::new(b"wdth", "Width", 0, WIDTH_VALUES),
    AxisDef::new(b"wght", "Weight", 1, UPRIGHT_WEIGHT_VALUES),
    AxisDef::new(b"ital", "Italic", 2, ROMAN_VALUES),
];

/// Axes of `SofiaSans-Italic[wdth,wght].ttf`.
pub static ITALIC_AXES: &[AxisDef] = &[
    AxisDef::new(b"wdth", "Width", 0, WIDTH_VALUES),
    AxisDef::new(b"wght", "Weight", 1, ITALIC_WEIGHT_VALUES),
    AxisDef::new(b"ital", "Italic", 2, ITALIC_VALUES),
];
