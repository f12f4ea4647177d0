//! Sofia fonts CLI library.

pub mod cli;
