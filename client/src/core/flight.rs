//! Single-flight tokens
//!
//! Each workflow owns a generation counter. A task captures a token when it
//! starts and may only write its results while that token is still the
//! newest one; superseded tasks run to completion but their writes are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation marker captured by one workflow invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightToken(u64);

impl FlightToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Issues tokens and answers whether a token is still current
#[derive(Debug, Default)]
pub struct SingleFlight {
    latest: AtomicU64,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new invocation, superseding every earlier token
    pub fn issue(&self) -> FlightToken {
        FlightToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: FlightToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Number of tokens issued so far
    pub fn issued(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}
