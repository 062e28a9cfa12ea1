//! In-memory schedule data and the edits a form applies to it.
mod edit;
mod field;
mod id;
mod types;

pub use edit::*;
pub use field::{CourseField, MeetingField, StudentField};
pub use id::EntityId;
pub use types::*;
