//! Growable byte buffer with 4 KiB growth steps.
//!
//! Capacity here means the number of usable (initialized) bytes, not the
//! allocator's capacity. Growth rounds the requested length up to a multiple
//! of [`BUFFER_GROWTH_STEP`] and never shrinks.

use crate::error::{H2Error, Result};

/// Growth granularity in bytes.
pub const BUFFER_GROWTH_STEP: usize = 4096;

/// Ensure `buf` holds at least `min_length` bytes.
///
/// When growth is needed the new length is `min_length` rounded up to the
/// next multiple of [`BUFFER_GROWTH_STEP`]. Existing bytes are preserved and
/// new bytes are zeroed. On `OutOfMemory` the buffer is left untouched.
pub fn reserve_buffer(buf: &mut Vec<u8>, min_length: usize) -> Result<()> {
    if min_length <= buf.len() {
        return Ok(());
    }

    let new_len = match round_up(min_length) {
        Some(n) => n,
        None => {
            tracing::debug!(min_length, "buffer growth overflows usize");
            return Err(H2Error::OutOfMemory);
        }
    };

    let additional = new_len - buf.len();
    if let Err(e) = buf.try_reserve_exact(additional) {
        tracing::debug!(min_length, new_len, error = %e, "buffer allocation failed");
        return Err(H2Error::OutOfMemory);
    }
    buf.resize(new_len, 0);
    Ok(())
}

fn round_up(n: usize) -> Option<usize> {
    let steps = n.checked_add(BUFFER_GROWTH_STEP - 1)? / BUFFER_GROWTH_STEP;
    steps.checked_mul(BUFFER_GROWTH_STEP)
}

/// Caller-owned scratch buffer used by the frame layer.
#[derive(Debug, Default, Clone)]
pub struct GrowableBuffer {
    data: Vec<u8>,
}

impl GrowableBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Usable length in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// See [`reserve_buffer`].
    pub fn reserve(&mut self, min_length: usize) -> Result<()> {
        reserve_buffer(&mut self.data, min_length)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
