//! Action trait for typed state transitions

use std::fmt::Debug;

/// Marker trait for anything that can be dispatched to a [`Store`](crate::Store)
///
/// Actions describe *what happened* (a search edit, a focus move, a new
/// selection proposal). Reducers decide what that means for state.
///
/// Actions must be:
/// - `Clone`: middleware sees the action before the reducer consumes it
/// - `Debug`: for logging
/// - `Send + 'static`: so they can travel through the event loop's channel
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable name used in log records
    fn name(&self) -> &'static str;

    /// Short human-readable description for log records
    ///
    /// Defaults to the `Debug` output. Override for actions carrying large
    /// payloads (for example a full selection vector).
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
