//! Command line interface

pub mod commands;
pub mod display;
pub mod manifest;

pub use self::commands::{CliArgs, Commands};
