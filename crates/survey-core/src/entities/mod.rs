//! Entity structs for all survey domain objects.
//!
//! JSON field names match the wire format served over HTTP and written to
//! the data file. Ids and timestamps default when absent so request bodies
//! can omit them.

mod response;
mod snapshot;
mod survey;

pub use response::{Answer, Response};
pub use snapshot::Snapshot;
pub use survey::{Question, Survey};
