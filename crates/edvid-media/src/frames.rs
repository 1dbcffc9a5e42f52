//! Fixed-interval frame sampling.
//!
//! Extracts one JPEG still every `interval` seconds of source-video time,
//! starting at 0 and stopping once fewer than one full interval remains
//! before the end of the video.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::probe::probe_media;

/// One sampled frame.
#[derive(Debug, Clone)]
pub struct FrameSample {
    /// Source-video time of the frame in seconds.
    pub timestamp: f64,
    /// JPEG-encoded image bytes.
    pub jpeg: Vec<u8>,
}

/// Restartable frame sampler bound to one source video.
#[derive(Debug, Clone)]
pub struct FrameSampler {
    video: PathBuf,
    interval: f64,
    duration: f64,
}

impl FrameSampler {
    /// Open a video for sampling. Probes the file once; an unreadable or
    /// missing resource fails here, not during sampling.
    pub async fn open(video: impl AsRef<Path>, interval: f64) -> MediaResult<Self> {
        if interval <= 0.0 {
            return Err(MediaError::InvalidInterval(interval));
        }

        let video = video.as_ref().to_path_buf();
        let info = probe_media(&video).await?;

        Ok(Self {
            video,
            interval,
            duration: info.duration,
        })
    }

    /// Source-video duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The timestamps that will be sampled: `0, d, 2d, ...`, stopping once
    /// fewer than one full interval remains. A zero-duration video yields
    /// no timestamps.
    pub fn timestamps(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut t = 0.0;
        while t + self.interval <= self.duration {
            out.push(t);
            t += self.interval;
        }
        out
    }

    /// Extract all frames. May be called more than once; each call uses a
    /// fresh scoped temp directory that is removed when extraction finishes.
    pub async fn sample(&self) -> MediaResult<Vec<FrameSample>> {
        let timestamps = self.timestamps();
        debug!(
            "Sampling {} frames from {} (interval {:.2}s)",
            timestamps.len(),
            self.video.display(),
            self.interval
        );

        let scratch = tempfile::tempdir()?;
        let mut samples = Vec::with_capacity(timestamps.len());

        for (i, &timestamp) in timestamps.iter().enumerate() {
            let frame_path = scratch.path().join(format!("frame_{:05}.jpg", i));

            let cmd = FfmpegCommand::new(&self.video, &frame_path)
                .seek(timestamp)
                .single_frame();
            FfmpegRunner::new().run(&cmd).await?;

            let jpeg = tokio::fs::read(&frame_path).await?;
            samples.push(FrameSample { timestamp, jpeg });
        }

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(duration: f64, interval: f64) -> FrameSampler {
        FrameSampler {
            video: PathBuf::from("test.mp4"),
            interval,
            duration,
        }
    }

    #[test]
    fn test_timestamps_are_floor_d_over_interval() {
        let s = sampler(10.0, 2.0);
        assert_eq!(s.timestamps(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_timestamps_strictly_increasing() {
        let s = sampler(7.5, 1.5);
        let ts = s.timestamps();
        assert_eq!(ts.len(), 5);
        assert!(ts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_partial_trailing_interval_dropped() {
        // 9.9s of video with 2s interval: last full interval starts at 6.0
        let s = sampler(9.9, 2.0);
        assert_eq!(s.timestamps(), vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_zero_duration_video_yields_empty() {
        let s = sampler(0.0, 2.0);
        assert!(s.timestamps().is_empty());
    }

    #[test]
    fn test_duration_shorter_than_interval_yields_empty() {
        let s = sampler(1.0, 2.0);
        assert!(s.timestamps().is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_nonpositive_interval() {
        let err = FrameSampler::open("whatever.mp4", 0.0).await.unwrap_err();
        assert!(matches!(err, MediaError::InvalidInterval(_)));

        let err = FrameSampler::open("whatever.mp4", -1.0).await.unwrap_err();
        assert!(matches!(err, MediaError::InvalidInterval(_)));
    }

    #[tokio::test]
    async fn test_open_missing_video_fails() {
        let err = FrameSampler::open("/nonexistent/video.mp4", 2.0)
            .await
            .unwrap_err();
        assert!(err.is_resource_error());
    }
}
