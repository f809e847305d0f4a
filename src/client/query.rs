//! Per-endpoint query state.

use chrono::{DateTime, Utc};

/// What the dashboard knows about one polled endpoint.
///
/// Starts out holding placeholder data. A successful fetch replaces the data
/// wholesale; a failed one flags the error but keeps the last data around.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    /// `data` is a stand-in, not a server response.
    pub is_placeholder_data: bool,
    /// The latest fetch failed.
    pub is_error: bool,
    /// When `data` was received from the server.
    pub data_updated_at: Option<DateTime<Utc>>,
    /// Disabled queries are never fetched.
    pub enabled: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_placeholder_data: false,
            is_error: false,
            data_updated_at: None,
            enabled: true,
        }
    }
}

impl<T> QueryState<T> {
    /// A query showing `placeholder` until its first response.
    #[must_use]
    pub fn with_placeholder(placeholder: T) -> Self {
        Self {
            data: Some(placeholder),
            is_placeholder_data: true,
            ..Self::default()
        }
    }

    /// A query that already holds a server response.
    #[must_use]
    pub fn resolved(data: T) -> Self {
        let mut state = Self::default();
        state.succeed(data, Utc::now());
        state
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Record a successful response received at `at`.
    pub fn succeed(&mut self, data: T, at: DateTime<Utc>) {
        self.data = Some(data);
        self.is_placeholder_data = false;
        self.is_error = false;
        self.data_updated_at = Some(at);
    }

    /// Record a failed fetch.
    pub fn fail(&mut self) {
        self.is_error = true;
    }

    /// Data is usable and not a placeholder.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.data.is_some() && !self.is_placeholder_data && !self.is_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_anchor;

    #[test]
    fn test_placeholder_until_first_response() {
        let mut state = QueryState::with_placeholder(12_345u64);
        assert!(state.is_placeholder_data);
        assert!(!state.is_fresh());
        assert!(state.data_updated_at.is_none());

        let at = parse_anchor(Some("2024-06-01T12:00:00Z"));
        state.succeed(42, at);
        assert_eq!(state.data, Some(42));
        assert!(!state.is_placeholder_data);
        assert_eq!(state.data_updated_at, Some(at));
        assert!(state.is_fresh());
    }

    #[test]
    fn test_failure_keeps_last_data() {
        let mut state = QueryState::resolved(7u64);
        state.fail();
        assert!(state.is_error);
        assert_eq!(state.data, Some(7));
        assert!(!state.is_fresh());

        state.succeed(8, Utc::now());
        assert!(!state.is_error);
        assert_eq!(state.data, Some(8));
    }

    #[test]
    fn test_disabled() {
        let state = QueryState::with_placeholder(0u64).disabled();
        assert!(!state.enabled);
        assert!(state.is_placeholder_data);
        assert!(QueryState::<u64>::default().enabled);
    }
}
