//! Output delivery — WAV file write plus an optional MP3 handoff to ffmpeg.
//!
//! The lossy encoder is an external collaborator, not part of the core:
//! when ffmpeg is missing or fails, the uncompressed WAV bytes are delivered
//! under the requested name instead. That fallback is the only failure this
//! crate deliberately masks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::warn;

use crate::error::WriteError;

/// Write WAV bytes to `path`.
pub fn write_wav(path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    fs::write(path, bytes).map_err(|source| WriteError {
        op: "write wav",
        source,
    })
}

/// Deliver the rendered track at `path`.
///
/// A `.wav` destination is written directly. Any other destination goes
/// through a temporary WAV next to it and an ffmpeg transcode; if the
/// transcode fails, the temporary file is renamed to the requested name so
/// the caller still receives a playable file.
pub fn deliver(path: &Path, wav_bytes: &[u8]) -> Result<(), WriteError> {
    if path.extension().is_some_and(|ext| ext == "wav") {
        return write_wav(path, wav_bytes);
    }

    let temp = temp_wav_path(path);
    if let Err(e) = write_wav(&temp, wav_bytes) {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }

    match encode_mp3(&temp, path) {
        Ok(()) => {
            let _ = fs::remove_file(&temp);
            Ok(())
        }
        Err(e) => {
            warn!("mp3 encode failed, delivering uncompressed wav instead: {e}");
            fs::rename(&temp, path).map_err(|source| WriteError {
                op: "rename wav",
                source,
            })
        }
    }
}

/// Temporary WAV sitting next to the final destination: `<path>.wav`.
fn temp_wav_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".wav");
    PathBuf::from(name)
}

/// Transcode `wav` to `mp3` with ffmpeg.
fn encode_mp3(wav: &Path, mp3: &Path) -> io::Result<()> {
    let status = Command::new("ffmpeg")
        .arg("-i")
        .arg(wav)
        .args(["-acodec", "libmp3lame", "-ab", "128k"])
        .arg(mp3)
        .arg("-y")
        .status()?;

    if !status.success() {
        return Err(io::Error::other(format!("ffmpeg exited with {status}")));
    }
    Ok(())
}
