//! Generation tokens backing trailing-edge debounce and stale-response
//! rejection.
//!
//! Each search context owns one [`SequenceGate`]. Every input event arms the
//! gate, which invalidates all previously issued tokens. A debounce sleep
//! checks its token after waking: stale means a newer keystroke arrived and
//! the search must not fire. A completed request checks its token before
//! touching the pane: stale means a newer cycle started while the request
//! was in flight and the response must be discarded.

/// Monotonically increasing generation counter. At most one token is live
/// per gate at any time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceGate {
    latest: u64,
}

/// Token issued by [`SequenceGate::arm`]. Live until the gate is armed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqToken(u64);

impl SequenceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, invalidating every previously issued token.
    pub fn arm(&mut self) -> SeqToken {
        self.latest += 1;
        SeqToken(self.latest)
    }

    /// Whether `token` is still the most recently armed one.
    pub fn is_live(&self, token: SeqToken) -> bool {
        self.latest == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshly_armed_token_is_live() {
        let mut gate = SequenceGate::new();
        let token = gate.arm();
        assert!(gate.is_live(token));
    }

    #[test]
    fn rapid_rearming_leaves_only_the_last_token_live() {
        // A burst of keystrokes arms the gate once per event; only the
        // final cycle may fire its search.
        let mut gate = SequenceGate::new();
        let tokens: Vec<_> = (0..10).map(|_| gate.arm()).collect();
        let live: Vec<_> = tokens.iter().filter(|t| gate.is_live(**t)).collect();
        assert_eq!(live.len(), 1);
        assert!(gate.is_live(*tokens.last().unwrap()));
    }

    #[test]
    fn in_flight_token_goes_stale_when_a_new_cycle_starts() {
        let mut gate = SequenceGate::new();
        let in_flight = gate.arm();
        gate.arm();
        assert!(!gate.is_live(in_flight));
    }
}
