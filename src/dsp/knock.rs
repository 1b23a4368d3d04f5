//! Knock voice — one percussive wooden-fish event.

use std::f64::consts::PI;

use crate::instrument::KnockTimbre;

use super::envelope::KnockEnvelope;

/// A single knock: a fixed-length event rendered sample by sample.
///
/// The sound is the product of the percussive envelope and a tonal body —
/// a hollow low-frequency resonance plus a short high-frequency strike
/// partial that fades after the impact.
#[derive(Debug, Clone)]
pub struct KnockVoice {
    timbre: KnockTimbre,
    envelope: KnockEnvelope,
    /// Samples the strike partial stays audible.
    strike_samples: usize,
    /// Samples the impact mix stays active.
    impact_samples: usize,
    total_samples: usize,
    sample_rate: f64,
    position: usize,
}

impl KnockVoice {
    pub fn new(sample_rate: f64, total_samples: usize, timbre: KnockTimbre) -> Self {
        KnockVoice {
            envelope: KnockEnvelope::new(total_samples, &timbre),
            strike_samples: total_samples / timbre.strike_div as usize,
            impact_samples: total_samples / timbre.impact_div as usize,
            timbre,
            total_samples,
            sample_rate,
            position: 0,
        }
    }

    /// Amplitude at a sample position, independent of the render cursor.
    ///
    /// Bounded by the timbre volume: the body mixes never exceed unity.
    pub fn sample_at(&self, index: usize) -> f64 {
        let t = index as f64 / self.sample_rate;
        self.timbre.volume * self.envelope.level(index) * self.body(index, t)
    }

    /// Generate the next sample and advance the cursor.
    pub fn next_sample(&mut self) -> f64 {
        if self.position >= self.total_samples {
            return 0.0;
        }
        let sample = self.sample_at(self.position);
        self.position += 1;
        sample
    }

    /// Has the whole event been rendered?
    pub fn is_finished(&self) -> bool {
        self.position >= self.total_samples
    }

    /// Tonal body at a sample position and event time `t` in seconds.
    fn body(&self, index: usize, t: f64) -> f64 {
        let wood = (2.0 * PI * self.timbre.body_frequency * t).sin();

        let strike = if index < self.strike_samples {
            (2.0 * PI * self.timbre.strike_frequency * t).sin() * self.timbre.strike_gain
        } else {
            0.0
        };

        if index < self.impact_samples {
            wood * self.timbre.impact_body_mix + strike * self.timbre.impact_strike_mix
        } else {
            wood * self.timbre.resonance_mix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knock() -> KnockVoice {
        // 0.4 s at 22050 Hz.
        KnockVoice::new(22050.0, 8820, KnockTimbre::default())
    }

    #[test]
    fn produces_sound() {
        let mut v = knock();
        let mut has_nonzero = false;
        for _ in 0..8820 {
            if v.next_sample().abs() > 0.001 {
                has_nonzero = true;
            }
        }
        assert!(has_nonzero, "knock should produce non-zero output");
    }

    #[test]
    fn bounded_by_volume() {
        let v = knock();
        for i in 0..8820 {
            let s = v.sample_at(i);
            assert!(
                s.abs() <= KnockTimbre::default().volume,
                "sample {i} out of range: {s}"
            );
        }
    }

    #[test]
    fn first_sample_is_silent() {
        // The attack envelope starts at zero.
        assert_eq!(knock().sample_at(0), 0.0);
    }

    #[test]
    fn silent_past_envelope_cutoff() {
        let v = knock();
        // Envelope cutoff: attack (220) + 0.7 * decay window (5880) = 4336.
        for i in 4336..8820 {
            assert_eq!(v.sample_at(i), 0.0, "sample {i} should be silent");
        }
    }

    #[test]
    fn next_sample_replays_sample_at() {
        let mut v = knock();
        let fixed = knock();
        for i in 0..8820 {
            assert_eq!(v.next_sample(), fixed.sample_at(i), "divergence at {i}");
        }
        assert!(v.is_finished());
        assert_eq!(v.next_sample(), 0.0, "finished voice must stay silent");
    }

    #[test]
    fn truncated_event_compresses_envelope() {
        // A clipped event renders its whole shape inside the shorter window.
        let v = KnockVoice::new(22050.0, 2205, KnockTimbre::default());
        let mut has_nonzero = false;
        for i in 0..2205 {
            if v.sample_at(i).abs() > 0.001 {
                has_nonzero = true;
            }
        }
        assert!(has_nonzero, "truncated knock should still sound");
    }
}
