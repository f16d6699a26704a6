pub mod form;
pub mod home;
pub mod list;
pub mod overlays;
