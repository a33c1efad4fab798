//! Timer module - gravity tick tokens and a single-slot scheduler
//!
//! The session never owns a clock. It hands out a [`TickRequest`] ("call
//! `on_tick` with this token after `delay_ms`") and the front end delivers it.
//! Tokens carry the piece generation and a per-tick serial, so a tick that was
//! scheduled for a piece that has since locked, or a tick delivered twice, is
//! recognised as stale and ignored.

/// Identifies one scheduled gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    /// Piece lifecycle the tick belongs to.
    pub generation: u32,
    /// Position of the tick within that lifecycle.
    pub serial: u32,
}

/// "Invoke me after `delay_ms` milliseconds with `token`."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRequest {
    pub token: TickToken,
    pub delay_ms: u32,
}

/// Single-slot timer service driven by elapsed time.
///
/// Scheduling replaces whatever was pending, so at most one tick chain is live
/// and each request fires at most once.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    pending: Option<(TickToken, u32)>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending request.
    pub fn schedule(&mut self, request: TickRequest) {
        self.pending = Some((request.token, request.delay_ms));
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Milliseconds until the pending tick is due.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.pending.map(|(_, remaining)| remaining)
    }

    /// Let `elapsed_ms` pass. Returns the token once, when it falls due.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TickToken> {
        let (token, remaining) = self.pending.as_mut()?;
        *remaining = remaining.saturating_sub(elapsed_ms);
        if *remaining > 0 {
            return None;
        }
        let token = *token;
        self.pending = None;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(generation: u32, delay_ms: u32) -> TickRequest {
        TickRequest {
            token: TickToken {
                generation,
                serial: 0,
            },
            delay_ms,
        }
    }

    #[test]
    fn test_fires_once_when_due() {
        let mut timer = TickScheduler::new();
        timer.schedule(request(1, 100));

        assert_eq!(timer.advance(60), None);
        assert_eq!(timer.remaining_ms(), Some(40));
        assert_eq!(timer.advance(40).map(|t| t.generation), Some(1));
        assert_eq!(timer.advance(1000), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut timer = TickScheduler::new();
        timer.schedule(request(1, 100));
        timer.schedule(request(2, 300));

        assert_eq!(timer.advance(100), None);
        assert_eq!(timer.advance(200).map(|t| t.generation), Some(2));
    }

    #[test]
    fn test_cancel() {
        let mut timer = TickScheduler::new();
        timer.schedule(request(1, 0));
        timer.cancel();
        assert_eq!(timer.advance(0), None);
    }
}
