//! Question-bank loading.

mod loader;

pub use loader::{load_bank_from_json, LoadError};
