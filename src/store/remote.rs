use super::*;

use crate::storage::{CustomerSource, RemoteStorage};
use tracing::{error, info};

/// Client-side cache over a remote customer document. Never writes.
///
/// A failed fetch yields an empty slice and is not cached, so the next call
/// tries the endpoint again.
pub struct RemoteReadOnlyStore {
    source: Box<dyn CustomerSource>,
    cache: Option<Vec<Customer>>,
}

impl RemoteReadOnlyStore {
    pub fn new(source: impl CustomerSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: None,
        }
    }

    pub fn from_url(url: &str) -> Result<Self, AppError> {
        Ok(Self::new(RemoteStorage::for_document(url)?))
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }
}

impl CustomerReader for RemoteReadOnlyStore {
    fn load_all(&mut self) -> &[Customer] {
        if self.cache.is_none() {
            match self.source.fetch() {
                Ok(customers) => {
                    info!(count = customers.len(), medium = self.source.medium(), "cached remote customers");
                    self.cache = Some(customers);
                }
                Err(err) => {
                    error!(error = %err, "failed to fetch remote customers");
                    return &[];
                }
            }
        }
        self.cache.as_deref().unwrap_or_default()
    }
}
