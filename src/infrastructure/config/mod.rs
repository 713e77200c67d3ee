//! Infrastructure configuration modules.

pub mod display;
pub mod logging;
pub mod settings;

pub use settings::Config;
