//! Remote AI provider clients.
//!
//! This crate provides:
//! - A chat-completion client with vision (image) message support
//! - Best-effort JSON extraction from model responses
//! - Narration-script and main-content generation on top of the chat client
//! - An ElevenLabs-style TTS client behind the `SpeechSynthesizer` seam
//! - The video-generation provider client
//! - The `ContextRetriever` seam for document context assembly

pub mod chat;
pub mod content;
pub mod error;
pub mod extract;
pub mod narration;
pub mod retrieval;
pub mod tts;
pub mod videogen;

pub use chat::{ChatClient, ChatMessage, ContentPart};
pub use content::generate_main_content;
pub use error::{LlmError, LlmResult};
pub use extract::extract_json;
pub use narration::{generate_narration, NarrationFrame};
pub use retrieval::{ConcatRetriever, ContextRetriever};
pub use tts::{ElevenLabsClient, SpeechSynthesizer};
pub use videogen::VideoGenClient;
