//! Base trait for slice state.

/// Marker trait for slice state objects.
///
/// States are cloneable values with a `Default` initial state; `PartialEq`
/// lets tests and views compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
