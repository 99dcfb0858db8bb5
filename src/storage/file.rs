use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug)]
pub struct JsonFileStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CustomerSource for JsonFileStorage {
    fn fetch(&self) -> Result<Vec<Customer>, AppError> {
        if !fs::exists(&self.path)? {
            return Err(AppError::NotFound(format!(
                "Customer file {}",
                self.path.display()
            )));
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;
        debug!(path = %self.path.display(), bytes = data.len(), "read customer file");

        codec::decode_collection(&data)
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

impl CustomerSink for JsonFileStorage {
    fn save(&self, customers: &[Customer]) -> Result<(), AppError> {
        if !self.path.exists() {
            create_file_parent(&self.path)?;
        }

        let data = codec::encode_collection(customers)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;

        info!(path = %self.path.display(), count = customers.len(), "saved customer file");
        Ok(())
    }
}
