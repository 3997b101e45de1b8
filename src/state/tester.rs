use super::RequestGeneration;
use crate::api::SentimentResult;
use crate::constants::ERROR_BACKEND_UNREACHABLE;

/// A pending analysis request from the tester view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub generation: u64,
    pub text: String,
}

/// State of the free-text sentiment tester
#[derive(Debug, Clone, Default)]
pub struct TesterState {
    input: String,
    result: Option<SentimentResult>,
    error: Option<String>,
    loading: bool,
    generation: RequestGeneration,
}

impl TesterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Start an analysis of the current input. Whitespace-only input and
    /// submissions while a request is in flight are ignored.
    pub fn submit(&mut self) -> Option<AnalysisTicket> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.result = None;
        Some(AnalysisTicket {
            generation: self.generation.next(),
            text: self.input.clone(),
        })
    }

    /// Apply a finished analysis; stale generations are ignored
    pub fn apply(&mut self, generation: u64, outcome: Result<SentimentResult, String>) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => {
                log::warn!("Tester analysis failed: {}", e);
                self.error = Some(ERROR_BACKEND_UNREACHABLE.to_string());
            }
        }
        true
    }

    pub fn result(&self) -> Option<&SentimentResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
