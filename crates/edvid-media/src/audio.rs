//! PCM audio segments and the stitched narration track.
//!
//! The TTS provider returns raw PCM: 16-bit signed little-endian samples,
//! 24 kHz, mono. Stitching is a small state machine: a cursor tracks where
//! the last successful segment ended, silence is inserted to reach each
//! line's target timestamp, and the cursor only advances when a segment is
//! actually appended.

use std::path::Path;

use crate::error::{MediaError, MediaResult};

/// Fixed sample rate of synthesized speech (Hz).
pub const SAMPLE_RATE: u32 = 24_000;
/// Fixed channel count of synthesized speech.
pub const CHANNELS: u16 = 1;
/// Bytes per sample (16-bit PCM).
pub const BYTES_PER_SAMPLE: usize = 2;

/// A decoded speech segment.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    samples: Vec<i16>,
}

impl AudioSegment {
    /// Decode a raw PCM payload.
    ///
    /// Fails when the payload is not a whole number of 16-bit frames, which
    /// in practice means the provider returned an error body instead of audio.
    pub fn from_pcm_bytes(data: &[u8]) -> MediaResult<Self> {
        if data.len() % (BYTES_PER_SAMPLE * CHANNELS as usize) != 0 {
            return Err(MediaError::invalid_audio(format!(
                "payload length {} is not a whole number of PCM frames",
                data.len()
            )));
        }

        let samples = data
            .chunks_exact(BYTES_PER_SAMPLE)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();

        Ok(Self { samples })
    }

    /// Build a segment from raw samples (test helper and silence source).
    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }
}

/// The single concatenated audio track assembled from speech and silence.
#[derive(Debug, Default)]
pub struct StitchedTrack {
    samples: Vec<i16>,
    cursor_secs: f64,
}

impl StitchedTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the last successful segment ended, in seconds of script time.
    pub fn cursor_secs(&self) -> f64 {
        self.cursor_secs
    }

    /// Total track duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Insert silence covering the gap between the cursor and `timestamp`.
    ///
    /// A non-positive gap inserts nothing. The cursor does not move here;
    /// it only advances when a segment is appended.
    pub fn fill_gap_to(&mut self, timestamp: f64) {
        let gap = timestamp - self.cursor_secs;
        if gap > 0.0 {
            let n = (gap * SAMPLE_RATE as f64).round() as usize;
            self.samples.extend(std::iter::repeat(0i16).take(n));
        }
    }

    /// Append a speech segment for the line at `timestamp` and advance the
    /// cursor to the end of that segment.
    pub fn push_segment(&mut self, segment: &AudioSegment, timestamp: f64) {
        self.samples.extend_from_slice(segment.samples());
        self.cursor_secs = timestamp + segment.duration_secs();
    }

    /// Serialize the track as a 24 kHz mono 16-bit WAV file.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> MediaResult<()> {
        let spec = hound::WavSpec {
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
        for &s in &self.samples {
            writer.write_sample(s)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds_of_audio(secs: f64) -> AudioSegment {
        let n = (secs * SAMPLE_RATE as f64) as usize;
        AudioSegment::from_samples(vec![100i16; n])
    }

    #[test]
    fn test_pcm_decode() {
        let seg = AudioSegment::from_pcm_bytes(&[0x01, 0x00, 0xFF, 0xFF]).unwrap();
        assert_eq!(seg.samples(), &[1, -1]);
    }

    #[test]
    fn test_pcm_decode_rejects_odd_length() {
        // Typical failure: provider returned a JSON error body
        let err = AudioSegment::from_pcm_bytes(b"{\"error\":1}").unwrap_err();
        assert!(matches!(err, MediaError::InvalidAudio(_)));
    }

    #[test]
    fn test_segment_duration() {
        let seg = seconds_of_audio(3.0);
        assert!((seg.duration_secs() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_gap_fill_and_cursor() {
        // Script: 3s audio at t=0, then a line at t=10 with 4s audio.
        // Expected: 3s speech + 7s silence + 4s speech = 14s total.
        let mut track = StitchedTrack::new();

        track.fill_gap_to(0.0);
        track.push_segment(&seconds_of_audio(3.0), 0.0);
        assert!((track.cursor_secs() - 3.0).abs() < 1e-9);

        track.fill_gap_to(10.0);
        track.push_segment(&seconds_of_audio(4.0), 10.0);

        assert!((track.duration_secs() - 14.0).abs() < 1e-6);
        assert!((track.cursor_secs() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_silence_for_past_timestamp() {
        let mut track = StitchedTrack::new();
        track.push_segment(&seconds_of_audio(5.0), 0.0);

        // Line timestamp behind the cursor: no silence inserted
        track.fill_gap_to(3.0);
        assert!((track.duration_secs() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_failed_line_does_not_advance_cursor() {
        let mut track = StitchedTrack::new();
        track.push_segment(&seconds_of_audio(2.0), 0.0);

        // A later line fills its gap but its synthesis fails: only silence
        // lands in the track and the cursor stays at the last success.
        track.fill_gap_to(6.0);
        assert!((track.cursor_secs() - 2.0).abs() < 1e-9);
        assert!((track.duration_secs() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_write_wav_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.wav");

        let mut track = StitchedTrack::new();
        track.push_segment(&seconds_of_audio(0.5), 0.0);
        track.write_wav(&path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(reader.len(), (0.5 * SAMPLE_RATE as f64) as u32);
    }

    #[test]
    fn test_empty_track() {
        let track = StitchedTrack::new();
        assert!(track.is_empty());
        assert_eq!(track.duration_secs(), 0.0);
    }
}
