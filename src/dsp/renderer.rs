//! WAV renderer — renders a prompt schedule to a WAV byte buffer.

use crate::error::RenderError;
use crate::schedule::Trigger;

use super::engine::AudioEngine;

/// Render a prompt schedule to a WAV file as bytes (16-bit mono PCM).
pub fn render_wav(
    triggers: &[Trigger],
    minutes: u32,
    sample_rate: u32,
) -> Result<Vec<u8>, RenderError> {
    let engine = AudioEngine::new(sample_rate as f64);
    let samples = engine.render(triggers, minutes)?;
    let pcm = quantize(&samples);

    Ok(encode_wav(&pcm, sample_rate, 1))
}

/// Quantize float samples to signed 16-bit PCM.
///
/// Input is clamped to [-1, 1] and scaled by 32767 with rounding, so full
/// scale maps to ±32767 (never -32768) and the same float buffer always
/// produces the same bytes.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .collect()
}

/// Encode i16 PCM samples to a WAV byte buffer.
pub fn encode_wav(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}
