//! Query lifecycle tracking: one record per submitted question, completed
//! exactly once by the background task that owns it.

pub mod record;
pub mod store;

pub use record::{QueryRecord, QueryStatus};
pub use store::{QueryStore, QueryStoreError, QueryStoreResult};
