//! Errors reported by the fixed-buffer clipping routines.

/// Failure of a clip that writes into caller-provided buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClipError {
    /// The destination buffer cannot hold the clipped polygon.
    /// Nothing is written when this is returned.
    #[error("buffer holds {available} vertices but the clipped polygon needs {required}")]
    BufferTooSmall { required: usize, available: usize },
}
