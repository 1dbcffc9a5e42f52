//! Shared data models for the Edvid backend.
//!
//! This crate provides Serde-serializable types for:
//! - Narration scripts (timestamped dialogue lines)
//! - Generated main content (summary + quiz questions)
//! - Video identifiers

pub mod content;
pub mod narration;
pub mod video;

// Re-export common types
pub use content::{MainContent, Question, QuestionKind};
pub use narration::{NarrationLine, NarrationScript};
pub use video::VideoId;
