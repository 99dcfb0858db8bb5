use super::*;

use crate::config::StoreConfig;
use crate::domain::next_customer_id;
use crate::storage::{CustomerSink, CustomerSource, JsonFileStorage, RemoteStorage};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// What to hand callers when every read path failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    #[default]
    Empty,
    /// Seed a single placeholder record so there is always a row to render.
    Sentinel,
}

/// How the cache was populated on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    File,
    Fallback,
    Missing,
    Degraded(String),
}

struct LoadedCache {
    customers: Vec<Customer>,
    outcome: LoadOutcome,
}

/// JSON-file backed customer store with a read-through cache.
///
/// The file is read once, on the first read or write. After that the
/// in-memory collection is the source of truth for this instance and the file
/// is only ever written, never re-read. Callers sharing an instance across
/// threads must serialize access themselves (e.g. `Mutex<LocalFileStore>`);
/// the `&mut self` receivers already enforce this within one thread.
pub struct LocalFileStore {
    file: JsonFileStorage,
    fallback: Option<Box<dyn CustomerSource>>,
    read_failure: ReadFailurePolicy,
    cache: Option<LoadedCache>,
}

impl LocalFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFileStorage::new(path),
            fallback: None,
            read_failure: ReadFailurePolicy::default(),
            cache: None,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, AppError> {
        let mut store = Self::new(&config.data_path).with_read_failure(config.read_failure);

        if let Some(url) = &config.fallback_url {
            store = store.with_fallback(RemoteStorage::for_document(url)?);
        }
        Ok(store)
    }

    /// Read-only source tried when the backing file does not exist.
    pub fn with_fallback(mut self, source: impl CustomerSource + 'static) -> Self {
        self.fallback = Some(Box::new(source));
        self
    }

    pub fn with_read_failure(mut self, policy: ReadFailurePolicy) -> Self {
        self.read_failure = policy;
        self
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }

    /// `None` until the first read or write.
    pub fn load_outcome(&self) -> Option<&LoadOutcome> {
        self.cache.as_ref().map(|cache| &cache.outcome)
    }

    /// Rewrites the backing file from the in-memory collection.
    pub fn persist(&mut self) -> Result<(), AppError> {
        let snapshot = self.loaded().customers.clone();
        self.commit(snapshot)
    }

    fn loaded(&mut self) -> &LoadedCache {
        let file = &self.file;
        let fallback = self.fallback.as_deref();
        let policy = self.read_failure;

        self.cache
            .get_or_insert_with(|| read_through(file, fallback, policy))
    }

    fn commit(&mut self, snapshot: Vec<Customer>) -> Result<(), AppError> {
        if let Err(err) = self.file.save(&snapshot) {
            error!(path = %self.file.path().display(), error = %err, "failed to persist customers");
            return Err(err);
        }

        if let Some(cache) = self.cache.as_mut() {
            cache.customers = snapshot;
        }
        Ok(())
    }
}

fn read_through(
    file: &JsonFileStorage,
    fallback: Option<&dyn CustomerSource>,
    policy: ReadFailurePolicy,
) -> LoadedCache {
    info!(path = %file.path().display(), "loading customers");

    match file.fetch() {
        Ok(customers) => {
            info!(count = customers.len(), "loaded customers from file");
            LoadedCache {
                customers,
                outcome: LoadOutcome::File,
            }
        }
        Err(err) if err.is_not_found() => match fallback {
            None => {
                warn!(path = %file.path().display(), "customer file missing, starting empty");
                LoadedCache {
                    customers: Vec::new(),
                    outcome: LoadOutcome::Missing,
                }
            }
            Some(source) => {
                warn!(
                    path = %file.path().display(),
                    medium = source.medium(),
                    "customer file missing, trying fallback source"
                );
                match source.fetch() {
                    Ok(customers) => {
                        info!(count = customers.len(), "loaded customers from fallback");
                        LoadedCache {
                            customers,
                            outcome: LoadOutcome::Fallback,
                        }
                    }
                    Err(err) => degraded(err, policy),
                }
            }
        },
        Err(err) => degraded(err, policy),
    }
}

fn degraded(err: AppError, policy: ReadFailurePolicy) -> LoadedCache {
    error!(error = %err, ?policy, "failed to read customers");

    let customers = match policy {
        ReadFailurePolicy::Empty => Vec::new(),
        ReadFailurePolicy::Sentinel => vec![Customer::sentinel()],
    };
    LoadedCache {
        customers,
        outcome: LoadOutcome::Degraded(err.to_string()),
    }
}

impl CustomerReader for LocalFileStore {
    fn load_all(&mut self) -> &[Customer] {
        &self.loaded().customers
    }
}

impl CustomerWriter for LocalFileStore {
    fn add(&mut self, candidate: NewCustomer) -> Result<Customer, AppError> {
        candidate.validate_required()?;

        let mut snapshot = self.loaded().customers.clone();
        let customer = candidate.into_customer(next_customer_id(&snapshot)?);
        snapshot.push(customer.clone());

        self.commit(snapshot)?;
        info!(id = customer.customer_id, "added customer");
        Ok(customer)
    }

    fn update(&mut self, customer: Customer) -> Result<bool, AppError> {
        customer.validate_required()?;

        let mut snapshot = self.loaded().customers.clone();
        let Some(existing) = snapshot
            .iter_mut()
            .find(|c| c.customer_id == customer.customer_id)
        else {
            warn!(id = customer.customer_id, "update skipped, customer not found");
            return Ok(false);
        };
        existing.overwrite_from(&customer);

        self.commit(snapshot)?;
        info!(id = customer.customer_id, "updated customer");
        Ok(true)
    }

    fn delete(&mut self, id: u32) -> Result<bool, AppError> {
        let mut snapshot = self.loaded().customers.clone();
        let Some(index) = snapshot.iter().position(|c| c.customer_id == id) else {
            warn!(id, "delete skipped, customer not found");
            return Ok(false);
        };
        snapshot.remove(index);

        self.commit(snapshot)?;
        info!(id, "deleted customer");
        Ok(true)
    }
}
