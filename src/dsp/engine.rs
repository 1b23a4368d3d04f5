//! Audio engine — renders a prompt schedule into a sample buffer.
//!
//! The engine resolves each trigger to sample offsets, synthesizes its knock
//! repetitions, and writes them into a fixed-length track buffer. Rendering
//! is a single synchronous pass; the only failure modes are an invalid
//! duration and buffer allocation.

use crate::error::RenderError;
use crate::schedule::Trigger;

use super::knock::KnockVoice;
use super::mixer::TrackBuffer;

/// Knocks struck per prompt, in quick succession.
pub const KNOCKS_PER_TRIGGER: usize = 2;
/// Silence between the knocks of one prompt, in seconds.
pub const KNOCK_GAP_SECONDS: f64 = 0.2;

/// The offline rendering engine.
pub struct AudioEngine {
    pub sample_rate: f64,
}

impl AudioEngine {
    pub fn new(sample_rate: f64) -> Self {
        AudioEngine { sample_rate }
    }

    /// Buffer length in samples for a track of `minutes`.
    pub fn track_samples(&self, minutes: u32) -> usize {
        (minutes as f64 * 60.0 * self.sample_rate) as usize
    }

    /// Render a prompt schedule to a mono f32 buffer of exactly
    /// `minutes * 60 * sample_rate` samples.
    ///
    /// Each trigger plays its knock twice, the second copy offset by the
    /// knock duration plus [`KNOCK_GAP_SECONDS`]. Events that run past the
    /// buffer end are truncated (the envelope window compresses to the
    /// remaining span); events that start at or past the end are skipped.
    pub fn render(&self, triggers: &[Trigger], minutes: u32) -> Result<Vec<f32>, RenderError> {
        if minutes == 0 {
            return Err(RenderError::InvalidDuration { minutes });
        }

        let total_samples = self.track_samples(minutes);
        let mut buffer = TrackBuffer::silence(total_samples)?;

        for trigger in triggers {
            for repeat in 0..KNOCKS_PER_TRIGGER {
                let repeat_offset =
                    repeat as f64 * (trigger.timbre.duration + KNOCK_GAP_SECONDS);
                let start_sample =
                    ((trigger.instant + repeat_offset) * self.sample_rate).round() as usize;
                let event_samples = (trigger.timbre.duration * self.sample_rate).round() as usize;

                let span = buffer.span_at(start_sample, event_samples);
                if span == 0 {
                    continue;
                }

                let mut voice = KnockVoice::new(self.sample_rate, span, trigger.timbre);
                let mut event = Vec::with_capacity(span);
                while !voice.is_finished() {
                    event.push(voice.next_sample() as f32);
                }
                buffer.write(start_sample, &event);
            }
        }

        Ok(buffer.into_samples())
    }
}
