//! Request handlers.

pub mod health;
pub mod narration;
pub mod videos;

pub use health::*;
pub use narration::*;
pub use videos::*;
