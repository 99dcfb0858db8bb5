use super::*;

use reqwest::blocking;
use tracing::info;
use url::Url;

pub const DEFAULT_ENDPOINT_PATH: &str = "/data/customers.json";

/// Read-only HTTP source serving the same document as the backing file.
#[derive(Debug)]
pub struct RemoteStorage {
    pub medium: String,
    pub url: Url,
}

impl RemoteStorage {
    pub fn new(url: &str) -> Result<Self, AppError> {
        Ok(Self {
            medium: "remote".to_string(),
            url: Url::parse(url)?,
        })
    }

    /// Joins an endpoint path onto a base address, e.g.
    /// `http://localhost:5000` + `/data/customers.json`.
    pub fn from_base(base_url: &str, endpoint_path: &str) -> Result<Self, AppError> {
        let url = Url::parse(base_url)?.join(endpoint_path)?;
        Ok(Self {
            medium: "remote".to_string(),
            url,
        })
    }

    /// Like [`RemoteStorage::new`], but a bare base address such as
    /// `http://localhost:5000` gets [`DEFAULT_ENDPOINT_PATH`] appended.
    pub fn for_document(url: &str) -> Result<Self, AppError> {
        let parsed = Url::parse(url)?;
        if parsed.path() == "/" {
            return Self::from_base(url, DEFAULT_ENDPOINT_PATH);
        }
        Ok(Self {
            medium: "remote".to_string(),
            url: parsed,
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl CustomerSource for RemoteStorage {
    fn fetch(&self) -> Result<Vec<Customer>, AppError> {
        let response = blocking::get(self.url.as_str())?;

        // Convert non-success status into a `reqwest::Error` which maps to `AppError::Request`
        let response = response.error_for_status()?;
        let res_str = response.text()?;
        info!(url = %self.url, bytes = res_str.len(), "fetched customer document");

        codec::decode_collection(&res_str)
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}
