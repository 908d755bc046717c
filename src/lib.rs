//! Career compass library

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod guidance;
pub mod input;
pub mod output;
pub mod processing;

pub use catalog::CareerCatalog;
pub use config::Config;
pub use error::{CareerCompassError, Result};
