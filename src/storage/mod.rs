pub mod codec;
pub mod file;
pub mod remote;

use crate::prelude::{AppError, Customer};
use std::fs;
use std::path::Path;

pub use file::JsonFileStorage;
pub use remote::RemoteStorage;

/// Anything a customer collection can be read from.
pub trait CustomerSource {
    fn fetch(&self) -> Result<Vec<Customer>, AppError>;

    fn medium(&self) -> &str;
}

/// Anything a customer collection can be written to. Writes replace the whole collection.
pub trait CustomerSink {
    fn save(&self, customers: &[Customer]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
