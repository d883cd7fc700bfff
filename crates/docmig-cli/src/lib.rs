//! Command-line driver for document field normalization.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
