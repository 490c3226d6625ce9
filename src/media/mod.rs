//! Lesson media helpers.
//!
//! Lessons embed YouTube videos; links arrive in every shape learners and
//! content authors paste them, so they are normalized here.

mod youtube;

pub use youtube::{parse_timestamp, VideoLink};
