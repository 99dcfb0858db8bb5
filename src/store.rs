pub mod local;
pub mod remote;

use crate::prelude::{AppError, Customer, NewCustomer};

pub use local::{LoadOutcome, LocalFileStore, ReadFailurePolicy};
pub use remote::RemoteReadOnlyStore;

/// Read capability shared by every customer store.
///
/// Reads never fail: stores absorb read-path errors and degrade to an empty
/// (or sentinel) collection. Both methods take `&mut self` because the first
/// call populates the cache.
pub trait CustomerReader {
    fn load_all(&mut self) -> &[Customer];

    fn get_by_id(&mut self, id: u32) -> Option<&Customer> {
        self.load_all().iter().find(|c| c.customer_id == id)
    }
}

/// Write capability. Only stores with a durable backing file implement it.
///
/// A mutation is complete only once the whole collection has been written;
/// write failures are returned to the caller and leave the cache untouched.
pub trait CustomerWriter: CustomerReader {
    fn add(&mut self, candidate: NewCustomer) -> Result<Customer, AppError>;

    /// `Ok(false)` when no record has `customer.customer_id`.
    fn update(&mut self, customer: Customer) -> Result<bool, AppError>;

    /// `Ok(false)` when no record has `id`.
    fn delete(&mut self, id: u32) -> Result<bool, AppError>;
}
