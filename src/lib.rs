pub mod dsp;
#[cfg(feature = "cli")]
pub mod encode;
pub mod error;
pub mod instrument;
pub mod schedule;

use wasm_bindgen::prelude::*;

use crate::error::MokugyoError;
use crate::schedule::Trigger;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the mokugyo version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Generate a full track: schedule prompts for `minutes` and render them.
/// Returns the schedule and the mono sample buffer.
pub fn generate_track(
    minutes: u32,
    sample_rate: u32,
    seed: u64,
) -> Result<(Vec<Trigger>, Vec<f32>), MokugyoError> {
    let triggers = schedule::schedule_seeded(minutes as f64 * 60.0, seed);
    let engine = dsp::engine::AudioEngine::new(sample_rate as f64);
    let samples = engine.render(&triggers, minutes)?;
    Ok((triggers, samples))
}

/// WASM-exposed: schedule prompts for a seeded track as a JSON value.
#[wasm_bindgen]
pub fn schedule_track(minutes: u32, seed: u64) -> Result<JsValue, JsValue> {
    let triggers = schedule::schedule_seeded(minutes as f64 * 60.0, seed);
    serde_wasm_bindgen::to_value(&triggers).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a seeded track to a WAV byte array.
#[wasm_bindgen]
pub fn render_track_wav(minutes: u32, sample_rate: u32, seed: u64) -> Result<Vec<u8>, JsValue> {
    let triggers = schedule::schedule_seeded(minutes as f64 * 60.0, seed);
    dsp::renderer::render_wav(&triggers, minutes, sample_rate)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a seeded track to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_track_samples(
    minutes: u32,
    sample_rate: u32,
    seed: u64,
) -> Result<Vec<f32>, JsValue> {
    let triggers = schedule::schedule_seeded(minutes as f64 * 60.0, seed);
    let engine = dsp::engine::AudioEngine::new(sample_rate as f64);
    engine
        .render(&triggers, minutes)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}
