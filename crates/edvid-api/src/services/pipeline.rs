//! The narration pipeline: frame sampling, scripting, speech stitching and
//! final composition.
//!
//! Skip policy for the stitch loop: a line that cannot be voiced (blank
//! dialogue, empty payload, undecodable payload) is skipped without moving
//! the cursor; a provider-fatal TTS error aborts the whole step. Silence
//! inserted for a line stays in the track even when that line is then
//! skipped, so later lines land relative to the last successful segment.

use std::path::Path;

use tracing::{debug, info, warn};

use edvid_llm::{NarrationFrame, SpeechSynthesizer};
use edvid_media::audio::{AudioSegment, StitchedTrack};
use edvid_media::compose::compose_final_video;
use edvid_media::frames::FrameSampler;
use edvid_models::{NarrationScript, VideoId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Output paths of a completed narration run.
#[derive(Debug)]
pub struct NarrationArtifacts {
    pub narration_file_path: String,
    pub final_video_path: String,
}

/// Synthesize every scripted line and assemble the single narration track.
pub async fn stitch_narration(
    synth: &dyn SpeechSynthesizer,
    script: &NarrationScript,
) -> ApiResult<StitchedTrack> {
    let mut track = StitchedTrack::new();

    for line in &script.narration {
        let dialogue = line.dialogue.trim();
        if dialogue.is_empty() {
            debug!("Skipping blank line at {:.2}s", line.timestamp);
            continue;
        }

        track.fill_gap_to(line.timestamp);

        // Fatal provider errors abort the whole step
        let payload = synth.synthesize(dialogue).await?;

        if payload.is_empty() {
            warn!("Empty speech payload for line at {:.2}s", line.timestamp);
            continue;
        }

        match AudioSegment::from_pcm_bytes(&payload) {
            Ok(segment) => track.push_segment(&segment, line.timestamp),
            Err(e) => {
                let prefix = String::from_utf8_lossy(&payload[..payload.len().min(64)]);
                warn!(
                    "Undecodable speech payload at {:.2}s ({}): {:?}",
                    line.timestamp, e, prefix
                );
            }
        }
    }

    Ok(track)
}

/// Run the full narration pipeline against an on-disk video.
pub async fn run_narration_pipeline(
    state: &AppState,
    video_path: &Path,
    prompt: &str,
) -> ApiResult<NarrationArtifacts> {
    let sampler = FrameSampler::open(video_path, state.config.frame_interval_secs).await?;
    let samples = sampler.sample().await?;
    info!(
        "Sampled {} frames from {:.2}s of video",
        samples.len(),
        sampler.duration()
    );

    let frames: Vec<NarrationFrame> = samples
        .into_iter()
        .map(|s| NarrationFrame {
            timestamp: s.timestamp,
            jpeg: s.jpeg,
        })
        .collect();

    let script = edvid_llm::generate_narration(&state.chat, prompt, &frames).await?;

    let video_id = VideoId::new();
    let artifacts_dir = Path::new(&state.config.artifacts_dir);
    tokio::fs::create_dir_all(artifacts_dir)
        .await
        .map_err(|e| ApiError::internal(format!("artifacts dir: {}", e)))?;

    let narration_path = artifacts_dir.join(format!("narration_{}.json", video_id));
    let script_json = serde_json::to_string_pretty(&script)
        .map_err(|e| ApiError::internal(format!("serializing script: {}", e)))?;
    tokio::fs::write(&narration_path, script_json)
        .await
        .map_err(|e| ApiError::internal(format!("writing script: {}", e)))?;

    let track = stitch_narration(state.tts.as_ref(), &script).await?;
    info!(
        "Stitched track: {:.2}s from {} spoken lines",
        track.duration_secs(),
        script.spoken_line_count()
    );

    // Scratch dir is removed on every exit path when the handle drops
    let scratch = tempfile::tempdir()
        .map_err(|e| ApiError::internal(format!("scratch dir: {}", e)))?;
    let wav_path = scratch.path().join("narration.wav");
    track.write_wav(&wav_path)?;

    let final_path = artifacts_dir.join(format!("final_{}.mp4", video_id));
    compose_final_video(video_path, &wav_path, &final_path).await?;

    info!("Final video rendered: {}", final_path.display());

    Ok(NarrationArtifacts {
        narration_file_path: narration_path.to_string_lossy().into_owned(),
        final_video_path: final_path.to_string_lossy().into_owned(),
    })
}
