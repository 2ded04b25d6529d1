//! Command handlers
//!
//! This module contains the handlers invoked by the command-line tool.

pub mod motion;
pub mod processing;
