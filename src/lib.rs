//! JSON-file backed customer records.
//!
//! [`store::LocalFileStore`] owns the collection: it loads the backing file
//! lazily, serves reads from memory, and rewrites the whole file after every
//! add, update or delete. [`store::RemoteReadOnlyStore`] serves the same
//! document over HTTP without any write path.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod storage;
pub mod store;
