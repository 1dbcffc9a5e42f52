//! FFmpeg CLI wrapper for the narration pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building and execution
//! - Media probing via FFprobe
//! - Fixed-interval frame sampling from a source video
//! - PCM audio segments and the cursor-based stitched track
//! - The speed-adjust + mux compositor that produces the final video

pub mod audio;
pub mod command;
pub mod compose;
pub mod error;
pub mod frames;
pub mod probe;

pub use audio::{AudioSegment, StitchedTrack, CHANNELS, SAMPLE_RATE};
pub use command::{FfmpegCommand, FfmpegRunner};
pub use compose::{compose_final_video, compute_speed_factor};
pub use error::{MediaError, MediaResult};
pub use frames::{FrameSample, FrameSampler};
pub use probe::{get_duration, probe_media, MediaInfo};
