//! Lock-guarded in-memory stores.
//!
//! Each store owns its collection and exposes it only through its
//! operations. `entries()` hands out a copy for snapshotting, never the map
//! itself.

mod response;
mod survey;

pub use response::ResponseStore;
pub use survey::SurveyStore;
