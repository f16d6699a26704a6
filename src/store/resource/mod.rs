//! Collection slice shared by drivers, trucks and assignments.

mod intent;
mod reducer;
mod state;

pub use intent::ResourceIntent;
pub use reducer::ResourceReducer;
pub use state::{ResourceState, Status};
