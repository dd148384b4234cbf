//! Library entry point for the apksweep CLI.

pub mod cleanup;
pub mod commands;
pub mod error;
pub mod format;
pub mod model;
pub mod scanner;
