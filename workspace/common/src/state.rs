use crate::error::ClientError;

/// Lifecycle of one remote call as seen by the UI.
///
/// `NotStarted -> Loading -> Success | Error`; starting again from either
/// terminal state goes back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    /// Terminal state for a finished call.
    pub fn resolve(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_success() {
        let state = FetchState::resolve(Ok(7));
        assert!(state.is_success());
        assert_eq!(state.data(), Some(&7));
    }

    #[test]
    fn test_resolve_error_keeps_user_message() {
        let state: FetchState<i32> = FetchState::resolve(Err(ClientError::Remote("bad airport".to_string())));
        assert_eq!(state.error().map(String::as_str), Some("bad airport"));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_retry_after_error_goes_back_to_loading() {
        let mut state: FetchState<i32> =
            FetchState::resolve(Err(ClientError::Transport("connection refused".to_string())));
        assert!(state.is_error());

        state = FetchState::Loading;
        assert!(state.is_loading());

        state = FetchState::resolve(Ok(1));
        assert!(state.is_success());
    }
}
