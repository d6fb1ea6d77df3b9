//! Latest-request tracking for reloads that can overlap.

/// Hands out increasing tickets; only the newest one may publish results
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Start a new request, superseding every earlier ticket
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
