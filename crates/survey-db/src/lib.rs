//! # survey-db
//!
//! In-memory state for the survey platform.
//!
//! Two stores each own one map behind one reader/writer lock:
//! [`SurveyStore`] (surveys by id) and [`ResponseStore`] (responses by
//! owning survey id, in insertion order). [`SurveyService`] sits above them
//! and is the only place business rules live. [`JsonDb`] loads the startup
//! [`Snapshot`](survey_core::entities::Snapshot) from a flat JSON file and
//! overwrites it on shutdown.
//!
//! The stores share no lock, so operations spanning both (saving a response,
//! taking a snapshot) are not atomic across them.

pub mod error;
pub mod jsondb;
pub mod service;
pub mod store;

mod test_support;

pub use error::PersistenceError;
pub use jsondb::JsonDb;
pub use service::SurveyService;
pub use store::{ResponseStore, SurveyStore};
