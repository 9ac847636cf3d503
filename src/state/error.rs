//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No network dispatcher attached to the state
    #[error("Network dispatcher not set")]
    DispatcherNotSet,

    /// The network thread hung up
    #[error("Failed to dispatch network event: {0}")]
    DispatchFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::DispatcherNotSet;
        assert!(error.to_string().contains("dispatcher not set"));

        let error = StateError::DispatchFailed("sending on a closed channel".to_string());
        assert!(error.to_string().contains("Failed to dispatch"));
        assert!(error.to_string().contains("closed channel"));
    }
}
