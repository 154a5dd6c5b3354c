//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod layout;
pub mod link;
pub mod nav;

pub use layout::{AuthLayout, PageLayout, Placeholder};
pub use link::Link;
pub use nav::Nav;
