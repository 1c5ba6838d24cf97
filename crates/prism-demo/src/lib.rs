#![forbid(unsafe_code)]

//! Prism demo library: argument parsing and report rendering.

pub mod cli;
pub mod report;
