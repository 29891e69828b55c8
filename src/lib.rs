//! console-template: command-line scaffold with layered option resolution.
//!
//! Option values come from the command line, then from layered JSON
//! configuration, then from typed defaults. Each command validates its
//! options through an ordered pipeline of steps before it runs.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod resolve;
