//! Latest-request guard
//!
//! Async replies can arrive in any order. Every request is issued a token
//! and only the most recently issued one may still apply its reply.

use std::fmt;

/// Identifies one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token; every earlier one becomes stale
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Make every outstanding token stale without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequence::new();
        let daily = seq.issue();
        let weekly = seq.issue();
        assert!(!seq.is_current(daily));
        assert!(seq.is_current(weekly));

        seq.invalidate();
        assert!(!seq.is_current(weekly));
        assert_eq!(seq.issue().to_string(), "#4");
    }
}
