//! Terminal output for the cart CLI
//!
//! Styled symbols on an interactive terminal, bracketed tags everywhere else
//! so output stays greppable in scripts and CI.

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, step_info, step_ok, step_warn_hint};
