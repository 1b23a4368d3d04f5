//! Knock instrument — the fixed timbre of the wooden-fish "tok".
//!
//! Every frequency, envelope zone boundary, decay coefficient and mix weight
//! lives in one structure so the instrument definition reads as a single
//! auditable table rather than literals scattered through the DSP code.

use serde::{Deserialize, Serialize};

/// Timbre definition for one percussive knock.
///
/// Envelope and body windows are expressed as integer divisors of the event
/// length: the attack spans `total / attack_div` samples, the decay progress
/// is measured against `total * decay_num / decay_den` samples, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnockTimbre {
    /// Nominal pitch in Hz, carried in the schedule. The rendered body
    /// resonates at `body_frequency`.
    pub base_frequency: f64,
    /// Hollow body resonance in Hz.
    pub body_frequency: f64,
    /// Strike transient partial in Hz.
    pub strike_frequency: f64,
    /// Length of one knock in seconds.
    pub duration: f64,
    /// Master volume [0, 1].
    pub volume: f64,

    /// Attack window: `total / attack_div` samples.
    pub attack_div: u32,
    /// Decay window numerator: the window spans `total * decay_num / decay_den`.
    pub decay_num: u32,
    /// Decay window denominator.
    pub decay_den: u32,
    /// Decay progress at or past which the event is silent.
    pub decay_cutoff: f64,
    /// Decay progress below which the level falls linearly.
    pub fast_fall_until: f64,
    /// Slope of the linear fall.
    pub fast_fall_slope: f64,
    /// Level at the start of the exponential tail.
    pub tail_level: f64,
    /// Exponential tail rate.
    pub tail_rate: f64,

    /// Strike partial sounds for the first `total / strike_div` samples.
    pub strike_div: u32,
    /// Impact mix is active for the first `total / impact_div` samples.
    pub impact_div: u32,
    /// Body weight while the impact mix is active.
    pub impact_body_mix: f64,
    /// Strike weight while the impact mix is active.
    pub impact_strike_mix: f64,
    /// Body weight after the impact window.
    pub resonance_mix: f64,
    /// Gain applied to the strike partial.
    pub strike_gain: f64,
}

impl Default for KnockTimbre {
    fn default() -> Self {
        KnockTimbre {
            base_frequency: 150.0,
            body_frequency: 130.0,
            strike_frequency: 800.0,
            duration: 0.4,
            volume: 0.9,
            attack_div: 40,
            decay_num: 2,
            decay_den: 3,
            decay_cutoff: 0.7,
            fast_fall_until: 0.2,
            fast_fall_slope: 2.5,
            tail_level: 0.5,
            tail_rate: 8.0,
            strike_div: 8,
            impact_div: 10,
            impact_body_mix: 0.7,
            impact_strike_mix: 0.3,
            resonance_mix: 0.9,
            strike_gain: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_in_range() {
        let t = KnockTimbre::default();
        assert!(t.volume > 0.0 && t.volume <= 1.0);
        // Worst-case body magnitude must keep volume * envelope * body
        // inside [-1, 1].
        let impact = t.impact_body_mix + t.strike_gain * t.impact_strike_mix;
        assert!(impact <= 1.0, "impact mix exceeds unity: {impact}");
        assert!(t.resonance_mix <= 1.0);
    }

    #[test]
    fn default_windows_ordered() {
        let t = KnockTimbre::default();
        // Attack is far shorter than the strike and impact windows.
        assert!(t.attack_div > t.impact_div);
        assert!(t.impact_div > t.strike_div);
        assert!(t.decay_num < t.decay_den);
    }

    #[test]
    fn timbre_round_trips_through_json() {
        let t = KnockTimbre::default();
        let json = serde_json::to_string(&t).expect("serialize");
        let back: KnockTimbre = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(t, back);
    }
}
