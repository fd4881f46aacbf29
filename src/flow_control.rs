//! Receive-side flow-control window accounting (RFC 7540 Section 6.9).
//!
//! One [`WindowState`] exists per stream and one per connection. It tracks
//! three values:
//!
//! - `local_window_size`: the window currently advertised to the peer.
//! - `recv_window_size`: bytes consumed but not yet returned to the peer via
//!   WINDOW_UPDATE. Negative while a local window reduction is still being
//!   absorbed.
//! - `recv_reduction`: window reduction not yet paid back by a later
//!   increase. Never sent to the peer.
//!
//! All guards run before any field is written, so a failed call leaves the
//! state exactly as it was.

use crate::error::{H2Error, Result};

/// Largest legal flow-control window, 2^31 - 1.
pub const MAX_WINDOW_SIZE: i32 = i32::MAX;

/// Initial window size mandated by the protocol before any SETTINGS.
pub const DEFAULT_INITIAL_WINDOW_SIZE: u32 = 65_535;

/// Returns `true` once at least half of the advertised window has been
/// consumed, which is when a WINDOW_UPDATE becomes worth sending.
pub fn should_send_window_update(local_window_size: i32, recv_window_size: i32) -> bool {
    recv_window_size >= local_window_size / 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    local_window_size: i32,
    recv_window_size: i32,
    recv_reduction: i32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            local_window_size: DEFAULT_INITIAL_WINDOW_SIZE as i32,
            recv_window_size: 0,
            recv_reduction: 0,
        }
    }
}

impl WindowState {
    /// Create a ledger advertising `initial_window_size` bytes.
    ///
    /// Fails with [`H2Error::FlowControl`] above [`MAX_WINDOW_SIZE`].
    pub fn new(initial_window_size: u32) -> Result<Self> {
        let local_window_size =
            i32::try_from(initial_window_size).map_err(|_| H2Error::FlowControl)?;
        Ok(Self {
            local_window_size,
            recv_window_size: 0,
            recv_reduction: 0,
        })
    }

    pub fn local_window_size(&self) -> i32 {
        self.local_window_size
    }

    pub fn recv_window_size(&self) -> i32 {
        self.recv_window_size
    }

    pub fn recv_reduction(&self) -> i32 {
        self.recv_reduction
    }

    /// Change the locally advertised window by `delta`.
    ///
    /// Returns the increment that must be sent to the peer in a
    /// WINDOW_UPDATE. For an increase this may be less than `delta`, since
    /// part of the increase can be absorbed by unreturned bytes or can repay
    /// an earlier reduction. A decrease (or zero) is applied silently and
    /// always returns 0.
    pub fn adjust_local_window_size(&mut self, delta: i32) -> Result<i32> {
        if delta > 0 {
            self.increase(delta)
        } else {
            self.decrease(delta)
        }
    }

    fn increase(&mut self, delta: i32) -> Result<i32> {
        let new_recv_window_size = self.recv_window_size.max(0) - delta;
        if new_recv_window_size >= 0 {
            self.recv_window_size = new_recv_window_size;
            tracing::trace!(delta, recv_window_size = self.recv_window_size, "window increase absorbed");
            return Ok(delta);
        }

        // The increase goes beyond the unreturned bytes: the advertised
        // window itself grows by the difference.
        if self.local_window_size > MAX_WINDOW_SIZE + new_recv_window_size {
            tracing::debug!(
                delta,
                local_window_size = self.local_window_size,
                recv_window_size = self.recv_window_size,
                recv_reduction = self.recv_reduction,
                "window increase exceeds maximum window size"
            );
            return Err(H2Error::FlowControl);
        }
        let growth = -new_recv_window_size;
        self.local_window_size += growth;

        let repaid = self.recv_reduction.min(growth);
        self.recv_reduction -= repaid;
        if self.recv_window_size < 0 {
            self.recv_window_size += repaid;
        } else {
            // Any positive balance is returned to the peer by this update.
            self.recv_window_size = repaid;
        }

        let delta = delta - repaid;
        tracing::trace!(
            delta,
            local_window_size = self.local_window_size,
            recv_window_size = self.recv_window_size,
            recv_reduction = self.recv_reduction,
            "window increased"
        );
        Ok(delta)
    }

    fn decrease(&mut self, delta: i32) -> Result<i32> {
        if self.local_window_size.checked_add(delta).map_or(true, |w| w < 0)
            || self.recv_window_size < i32::MIN - delta
            || self.recv_reduction > i32::MAX + delta
        {
            tracing::debug!(
                delta,
                local_window_size = self.local_window_size,
                recv_window_size = self.recv_window_size,
                recv_reduction = self.recv_reduction,
                "window decrease out of range"
            );
            return Err(H2Error::FlowControl);
        }

        // The peer is not told; withholding -delta bytes of future
        // WINDOW_UPDATEs shrinks its view of the window.
        self.local_window_size += delta;
        self.recv_window_size += delta;
        self.recv_reduction -= delta;
        tracing::trace!(
            delta,
            local_window_size = self.local_window_size,
            recv_window_size = self.recv_window_size,
            recv_reduction = self.recv_reduction,
            "window decreased"
        );
        Ok(0)
    }

    /// Account for `len` bytes of received DATA payload (padding included).
    ///
    /// Fails if the peer sent more than the advertised window allows.
    pub fn record_received(&mut self, len: u32) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| H2Error::FlowControl)?;
        if self.recv_window_size > self.local_window_size - len
            || self.recv_window_size > MAX_WINDOW_SIZE - len
        {
            tracing::debug!(
                len,
                local_window_size = self.local_window_size,
                recv_window_size = self.recv_window_size,
                "peer exceeded flow-control window"
            );
            return Err(H2Error::FlowControl);
        }
        self.recv_window_size += len;
        Ok(())
    }

    pub fn should_send_window_update(&self) -> bool {
        should_send_window_update(self.local_window_size, self.recv_window_size)
    }

    /// Hand back the consumed bytes as a WINDOW_UPDATE increment once the
    /// threshold is reached, resetting the consumed count.
    pub fn take_window_update(&mut self) -> Option<u32> {
        if self.recv_window_size <= 0 || !self.should_send_window_update() {
            return None;
        }
        let increment = self.recv_window_size as u32;
        self.recv_window_size = 0;
        Some(increment)
    }
}

/// Locally configured initial receive windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    stream_window_size: u32,
    connection_window_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            stream_window_size: DEFAULT_INITIAL_WINDOW_SIZE,
            connection_window_size: DEFAULT_INITIAL_WINDOW_SIZE,
        }
    }
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stream_window_size(mut self, size: u32) -> Self {
        self.stream_window_size = size;
        self
    }

    pub fn connection_window_size(mut self, size: u32) -> Self {
        self.connection_window_size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let max = MAX_WINDOW_SIZE as u32;
        if self.stream_window_size > max || self.connection_window_size > max {
            return Err(H2Error::FlowControl);
        }
        Ok(())
    }

    /// Fresh ledger for a new stream.
    pub fn stream_window(&self) -> Result<WindowState> {
        self.validate()?;
        WindowState::new(self.stream_window_size)
    }

    /// Fresh ledger for the connection.
    pub fn connection_window(&self) -> Result<WindowState> {
        self.validate()?;
        WindowState::new(self.connection_window_size)
    }
}
