//! Command-line front end for the cart

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
