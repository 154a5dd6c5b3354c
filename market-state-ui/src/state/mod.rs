//! State Management
//!
//! Navigation state and the browser history binding.

pub mod history;
pub mod navigation;

pub use navigation::{provide_navigation, use_navigation, NavigationState};
