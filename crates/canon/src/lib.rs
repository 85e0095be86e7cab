//! Canon library interface for the binary and integration tests

#![allow(clippy::needless_pass_by_value)]

pub mod check;
pub mod cli;
pub mod config;
pub mod files;
pub mod output;
pub mod rename;
pub mod rules;
