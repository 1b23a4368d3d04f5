use std::collections::TryReserveError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum MokugyoError {
    Render(RenderError),
    Write(WriteError),
}

#[derive(Debug)]
pub enum RenderError {
    /// Requested track duration was not a positive number of minutes.
    InvalidDuration { minutes: u32 },
    /// The sample buffer could not be allocated.
    BufferAllocation {
        samples: usize,
        source: TryReserveError,
    },
}

/// A storage write failed. Carries the operation name so the caller can
/// tell which step broke.
#[derive(Debug)]
pub struct WriteError {
    pub op: &'static str,
    pub source: io::Error,
}

impl fmt::Display for MokugyoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MokugyoError::Render(e) => write!(f, "Render error: {e}"),
            MokugyoError::Write(e) => write!(f, "Write error: {e}"),
        }
    }
}

impl std::error::Error for MokugyoError {}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidDuration { minutes } => {
                write!(f, "Invalid track duration: {minutes} minutes (must be positive)")
            }
            RenderError::BufferAllocation { samples, source } => {
                write!(f, "Cannot allocate sample buffer of {samples} samples: {source}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.op, self.source)
    }
}

impl std::error::Error for WriteError {}

impl From<RenderError> for MokugyoError {
    fn from(e: RenderError) -> Self {
        MokugyoError::Render(e)
    }
}

impl From<WriteError> for MokugyoError {
    fn from(e: WriteError) -> Self {
        MokugyoError::Write(e)
    }
}
