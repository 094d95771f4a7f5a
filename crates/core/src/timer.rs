//! One-shot round timer.
//!
//! Each round owns at most one armed timer. Arming a new timer (or replacing
//! the round) drops the old one, and every timer carries a token tied to its
//! round id, so a callback scheduled for a previous round can be recognised
//! as stale and ignored.

/// What happens when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hide the tile numbers.
    Hide,
    /// Replace the round with a new one at `next_level`.
    Advance { next_level: u8 },
}

/// Identifies one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub round_id: u32,
    pub kind: TimerKind,
}

/// Cancelable one-shot timer counted down in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTimer {
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    token: TimerToken,
    remaining_ms: u32,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Arm the timer, superseding anything armed before.
    pub fn arm(&mut self, token: TimerToken, delay_ms: u32) {
        self.armed = Some(Armed {
            token,
            remaining_ms: delay_ms,
        });
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn token(&self) -> Option<TimerToken> {
        self.armed.map(|a| a.token)
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed.map(|a| a.remaining_ms)
    }

    /// Count down; returns the token if the timer expired (and disarms it).
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TimerToken> {
        let armed = self.armed.as_mut()?;
        armed.remaining_ms = armed.remaining_ms.saturating_sub(elapsed_ms);
        if armed.remaining_ms > 0 {
            return None;
        }
        self.armed.take().map(|a| a.token)
    }

    /// Disarm and return true if `token` is the armed timer.
    pub fn take_if(&mut self, token: TimerToken) -> bool {
        if self.token() == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}
