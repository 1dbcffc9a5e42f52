//! Business logic services.

pub mod pipeline;

pub use pipeline::{run_narration_pipeline, stitch_narration, NarrationArtifacts};
