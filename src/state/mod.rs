//! View state holders
//!
//! Each view owns one of these structs; they carry no terminal or network
//! handles so they can be driven directly from tests. Responses from the
//! backend are tagged with a [`RequestGeneration`] number and only the
//! response to the most recent request is applied.

pub mod headlines;
pub mod health;
pub mod tester;

pub use headlines::{FetchTicket, HeadlinesState};
pub use health::{HealthMonitor, HealthStatus};
pub use tester::{AnalysisTicket, TesterState};

/// Monotonic request counter used to discard responses that arrive after a newer request was issued
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the number for a new request; it supersedes every earlier one
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest
    }
}
