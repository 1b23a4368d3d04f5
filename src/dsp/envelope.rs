//! Percussive envelope for the wooden-fish knock.

use crate::instrument::KnockTimbre;

/// Attack/decay envelope evaluated by sample position within one event.
///
/// Unlike a gated ADSR, the knock has a fixed length, so the whole curve is
/// a pure function of position: a short quadratic attack, a fast linear
/// fall, an exponential tail, and silence past the cutoff.
#[derive(Debug, Clone)]
pub struct KnockEnvelope {
    /// Samples in the attack window.
    attack_samples: usize,
    /// Samples the decay progress is measured against.
    decay_samples: usize,
    decay_cutoff: f64,
    fast_fall_until: f64,
    fast_fall_slope: f64,
    tail_level: f64,
    tail_rate: f64,
}

impl KnockEnvelope {
    /// Build the envelope for an event of `total_samples`.
    ///
    /// Windows use integer arithmetic: attack is `total / attack_div`,
    /// decay progress runs over `total * decay_num / decay_den`.
    pub fn new(total_samples: usize, timbre: &KnockTimbre) -> Self {
        KnockEnvelope {
            attack_samples: total_samples / timbre.attack_div as usize,
            decay_samples: total_samples * timbre.decay_num as usize / timbre.decay_den as usize,
            decay_cutoff: timbre.decay_cutoff,
            fast_fall_until: timbre.fast_fall_until,
            fast_fall_slope: timbre.fast_fall_slope,
            tail_level: timbre.tail_level,
            tail_rate: timbre.tail_rate,
        }
    }

    /// Envelope level [0, 1] at the given sample position.
    pub fn level(&self, sample_index: usize) -> f64 {
        if sample_index < self.attack_samples {
            let progress = sample_index as f64 / self.attack_samples as f64;
            progress * progress
        } else {
            if self.decay_samples == 0 {
                return 0.0;
            }
            let decay_index = sample_index - self.attack_samples;
            let progress = decay_index as f64 / self.decay_samples as f64;

            if progress >= self.decay_cutoff {
                0.0
            } else if progress < self.fast_fall_until {
                1.0 - progress * self.fast_fall_slope
            } else {
                self.tail_level * (-(progress - self.fast_fall_until) * self.tail_rate).exp()
            }
        }
    }
}
