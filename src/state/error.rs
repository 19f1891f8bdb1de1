//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Trigger control is disabled while a request is pending
    #[error("Generate is disabled while a request is pending")]
    TriggerDisabled,

    /// No network worker is attached to the state
    #[error("Network channel not set in state")]
    NetworkChannelNotSet,

    /// Network worker stopped receiving events
    #[error("Network channel closed")]
    NetworkChannelClosed,
}
