//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (open the menu, confirm a deletion)
/// - Network completions (a list arrived, a create was acknowledged)
///
/// Intents cross from the worker thread to the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}
