pub use crate::cli::{command, run_app};
pub use crate::config::StoreConfig;
pub use crate::domain::{
    customer::{self, Customer, CustomerCollection, NewCustomer},
    next_customer_id,
};
pub use crate::errors::AppError;
pub use crate::storage::{CustomerSink, CustomerSource, JsonFileStorage, RemoteStorage};
pub use crate::store::{
    CustomerReader, CustomerWriter, LoadOutcome, LocalFileStore, ReadFailurePolicy,
    RemoteReadOnlyStore,
};
