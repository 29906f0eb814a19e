//! Overlay event queue: redraw notifications from providers to the host.

use crate::OverlayKind;

/// Emitted when a provider needs the map redrawn (e.g., after activation
/// binds it to a new body).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawRequested {
    /// The layer requesting the redraw.
    pub kind: OverlayKind,
}

/// Queue of pending redraw requests.
///
/// Providers push, the host drains once per frame. A request nobody drains
/// is dropped by the next drain — an unobserved notification is a no-op.
#[derive(Debug, Default)]
pub struct OverlayEvents {
    pending: Vec<RedrawRequested>,
}

impl OverlayEvents {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a redraw request for one layer.
    pub fn request_redraw(&mut self, kind: OverlayKind) {
        self.pending.push(RedrawRequested { kind });
    }

    /// Take all pending requests, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<RedrawRequested> {
        std::mem::take(&mut self.pending)
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no requests are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
