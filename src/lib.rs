//! Deploy Help Library
//!
//! Column-aligned help text for a deployment command-line tool: a small
//! tab-stop formatter, the static command registry and the full help page
//! built on top of them.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::formatter::{render_records, Cursor, MissingOption, Record};
pub use crate::core::page::HelpPage;
pub use crate::domain::config::{HelpConfig, OptionStops, TabStops};
pub use crate::domain::error::{HelpError, HelpResult};
