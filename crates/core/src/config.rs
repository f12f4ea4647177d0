//! Configuration constants for the Sofia Sans metadata pass.

/// Directory holding the variable fonts, relative to the working directory.
pub const VARIABLE_DIR: &str = "../fonts/variable";

/// Upright variable font filename.
pub const UPRIGHT_FILENAME: &str = "SofiaSans[wdth,wght].ttf";

/// Italic variable font filename.
pub const ITALIC_FILENAME: &str = "SofiaSans-Italic[wdth,wght].ttf";

/// Prefix of the confirmation line printed per processed font.
pub const STAT_LOG_PREFIX: &str = "[STAT TABLE]";
