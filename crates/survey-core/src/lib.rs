//! # survey-core
//!
//! Core types, ID generation, and error types for the survey platform.
//!
//! This crate provides the foundational types shared across all survey crates:
//! - Entity structs for surveys, questions, responses, and answers
//! - The persisted `Snapshot` aggregate
//! - The sortable `Id` type and injectable ID providers
//! - Injectable clock providers
//! - The cross-cutting `SurveyError` taxonomy

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use clock::{Clock, StepClock, SystemClock};
pub use errors::{SurveyError, ValidationError};
pub use ids::{Id, IdGenerator, SequentialIdGenerator, UlidGenerator};
