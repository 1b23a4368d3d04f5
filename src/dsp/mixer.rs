//! Track buffer — fixed-length sample buffer with bounded overwrite writes.

use crate::error::RenderError;

/// A fixed-length mono sample buffer that knock events are written into.
///
/// The length is set at allocation and never changes. Writes overwrite
/// rather than accumulate (events are sparse; the last writer wins), and
/// every write is clamped to the buffer extent, so an event that runs past
/// the end is truncated and one that starts past the end writes nothing.
#[derive(Debug, Clone)]
pub struct TrackBuffer {
    samples: Vec<f32>,
}

impl TrackBuffer {
    /// Allocate a zeroed buffer of `num_samples` (digital silence).
    ///
    /// Allocation goes through `try_reserve_exact` so an impossible request
    /// surfaces as an error instead of aborting the process.
    pub fn silence(num_samples: usize) -> Result<Self, RenderError> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(num_samples)
            .map_err(|source| RenderError::BufferAllocation {
                samples: num_samples,
                source,
            })?;
        samples.resize(num_samples, 0.0);
        Ok(TrackBuffer { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// How many samples of a write of `len` starting at `offset` fit.
    pub fn span_at(&self, offset: usize, len: usize) -> usize {
        if offset >= self.samples.len() {
            0
        } else {
            len.min(self.samples.len() - offset)
        }
    }

    /// Overwrite samples at `offset`, clamped to the buffer extent.
    /// Returns the number of samples actually written.
    pub fn write(&mut self, offset: usize, values: &[f32]) -> usize {
        let n = self.span_at(offset, values.len());
        if n > 0 {
            self.samples[offset..offset + n].copy_from_slice(&values[..n]);
        }
        n
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer and return the raw samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_is_all_zero() {
        let buf = TrackBuffer::silence(128).expect("alloc");
        assert_eq!(buf.len(), 128);
        assert!(buf.as_slice().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn write_lands_at_offset() {
        let mut buf = TrackBuffer::silence(8).expect("alloc");
        let n = buf.write(2, &[0.5, -0.5]);
        assert_eq!(n, 2);
        assert_eq!(buf.as_slice(), &[0.0, 0.0, 0.5, -0.5, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn write_truncates_at_end() {
        let mut buf = TrackBuffer::silence(4).expect("alloc");
        let n = buf.write(2, &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(n, 2, "only two samples fit");
        assert_eq!(buf.as_slice(), &[0.0, 0.0, 0.1, 0.2]);
    }

    #[test]
    fn write_past_end_is_a_no_op() {
        let mut buf = TrackBuffer::silence(4).expect("alloc");
        assert_eq!(buf.write(4, &[0.9]), 0);
        assert_eq!(buf.write(100, &[0.9]), 0);
        assert!(buf.as_slice().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn writes_overwrite_rather_than_sum() {
        let mut buf = TrackBuffer::silence(4).expect("alloc");
        buf.write(1, &[0.5, 0.5]);
        buf.write(1, &[0.25, 0.25]);
        assert_eq!(buf.as_slice(), &[0.0, 0.25, 0.25, 0.0]);
    }

    #[test]
    fn length_is_fixed_after_writes() {
        let mut buf = TrackBuffer::silence(16).expect("alloc");
        buf.write(10, &[1.0; 32]);
        assert_eq!(buf.len(), 16);
    }
}
