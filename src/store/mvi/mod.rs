//! Model-View-Intent (MVI) primitives for the store.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value owned by one slice, replaced wholesale on every intent
//! - **Intent**: user action or network completion addressed to one slice
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
