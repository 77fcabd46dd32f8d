pub mod sync;

pub use sync::{sync_contributors, SyncOutcome};
