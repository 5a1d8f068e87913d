//! Command-line front end for `pixelsmith-core`.
//!
//! Loads an image with the `image` crate, runs operations from the
//! interactive menu or one-shot subcommands, and writes the result back out.

pub mod app;
pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod image_io;
pub mod logging;
pub mod menu;

pub use error::CliError;
