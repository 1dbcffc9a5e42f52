//! Final video composition: speed-adjust the source video so its duration
//! matches the stitched narration track, then mux the track in as the only
//! audio stream.

use std::path::Path;

use tracing::{info, warn};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;
use crate::probe::probe_media;

/// Video codec for the final render.
pub const VIDEO_CODEC: &str = "libx264";
/// Audio codec for the final render.
pub const AUDIO_CODEC: &str = "aac";

/// Uniform playback-speed factor that stretches `video_duration` onto
/// `audio_duration`. Returns `None` for a degenerate zero-length track.
pub fn compute_speed_factor(video_duration: f64, audio_duration: f64) -> Option<f64> {
    if audio_duration > 0.0 {
        Some(video_duration / audio_duration)
    } else {
        None
    }
}

/// Produce the final video at `output`.
///
/// The source video's own audio, if any, is discarded; the narration track
/// fully replaces it. A zero-duration track copies the source unmodified
/// with a warning and attaches no audio.
pub async fn compose_final_video(
    video: impl AsRef<Path>,
    audio: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> MediaResult<()> {
    let video = video.as_ref();
    let audio = audio.as_ref();
    let output = output.as_ref();

    let video_info = probe_media(video).await?;
    let audio_duration = probe_media(audio).await.map(|i| i.duration).unwrap_or(0.0);

    info!(
        "Compositing: video {:.2}s, narration audio {:.2}s",
        video_info.duration, audio_duration
    );

    let Some(speed_factor) = compute_speed_factor(video_info.duration, audio_duration) else {
        warn!("Narration track is empty; using original video without audio");
        tokio::fs::copy(video, output).await?;
        return Ok(());
    };

    info!("Video speed factor: {:.3}", speed_factor);

    let cmd = FfmpegCommand::new(video, output)
        .input(audio)
        .video_filter(format!("setpts=PTS/{:.6}", speed_factor))
        .map("0:v:0")
        .map("1:a:0")
        .video_codec(VIDEO_CODEC)
        .audio_codec(AUDIO_CODEC);

    let result = FfmpegRunner::new().run(&cmd).await;

    if result.is_err() {
        // No partial output on failure
        let _ = tokio::fs::remove_file(output).await;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_factor() {
        assert_eq!(compute_speed_factor(100.0, 50.0), Some(2.0));
        assert_eq!(compute_speed_factor(40.0, 80.0), Some(0.5));
    }

    #[test]
    fn test_speed_factor_end_to_end_scenario() {
        // 40s video, 14s stitched track -> factor ~2.857
        let factor = compute_speed_factor(40.0, 14.0).unwrap();
        assert!((factor - 40.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_audio_is_degenerate() {
        assert_eq!(compute_speed_factor(100.0, 0.0), None);
        assert_eq!(compute_speed_factor(0.0, 0.0), None);
    }

    #[tokio::test]
    async fn test_missing_video_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.mp4");
        let err = compose_final_video("/nonexistent/video.mp4", "/nonexistent/audio.wav", &out)
            .await
            .unwrap_err();
        assert!(err.is_resource_error());
    }
}
