//! Infrastructure: configuration loading and process setup.

pub mod config;
