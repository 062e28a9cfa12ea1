//! Course schedule transcripts.
//!
//! Holds the student/course/meeting data a user types into the schedule form,
//! the pure edits applied to it, and the renderer that turns a snapshot of it
//! into a self-contained "View Course Schedule" HTML page.

pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod sample;

pub use error::{Result, TranscriptError};
pub use model::*;
pub use render::{render_transcript, transcript_file_name};
