//! Sofia Core - STAT table and instance naming pass for the Sofia Sans
//! variable fonts.

pub mod axes;
pub mod config;
pub mod naming;
pub mod pipeline;

#[cfg(test)]
mod test_fonts;

pub use axes::{ITALIC_AXES, UPRIGHT_AXES};
pub use naming::{FontStyle, instance_postscript_name, postscript_family_name, update_instance_names};
pub use pipeline::{FontTarget, process_font, run, sofia_targets};
pub use sofia_font_stat::apply_stat;
