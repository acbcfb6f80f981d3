//! Core RPM archive inspection module

pub mod error;
pub mod format;
pub mod inspector;
pub mod models;
pub mod utils;

pub use error::{Result, RpmError};
pub use inspector::{RpmInspector, inspect_file};
