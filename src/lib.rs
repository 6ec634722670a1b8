//! jpdata Library
//!
//! This library provides the core functionality for the `jpdata` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
