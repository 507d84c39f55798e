//! Bundlelint - consistency checker for .properties translation bundles
//!
//! Bundlelint is a CLI tool and library for validating that the locale
//! resource bundles of a project stay mutually consistent. It checks that
//! every key of the most specific ("driving") bundle exists in each reference
//! bundle, and that no value contains a known misspelling from a declarative
//! denylist.
//!
//! ## Module Structure
//!
//! - `bundle`: Bundle loading (.properties parsing) and entry types
//! - `cli`: Command-line interface layer (arguments, run driver, exit status)
//! - `config`: Configuration file loading and parsing
//! - `issues`: Finding type definitions and reporting
//! - `report`: Report aggregation and cargo-style output
//! - `rules`: Detection rules (missing keys, forbidden substrings)

pub mod bundle;
pub mod cli;
pub mod config;
pub mod issues;
pub mod report;
pub mod rules;
