//! Single-Page Navigation
//!
//! Location state, history integration and the render trigger.
//!
//! # Example
//!
//! ```rust
//! use market_state::navigation::{MemoryHistory, Navigator, Resolution};
//! use market_state::routing::{RouteTable, View};
//!
//! let mut navigator = Navigator::new(
//!     RouteTable::standard(),
//!     MemoryHistory::new("/"),
//!     |resolution: &Resolution| println!("render {}", resolution.title()),
//! );
//!
//! navigator.navigate("/dashboard").unwrap();
//! assert_eq!(navigator.location(), "/dashboard");
//!
//! navigator.back().unwrap();
//! assert_eq!(navigator.resolution().view(), Some(View::Landing));
//! ```

pub mod error;
pub mod history;
pub mod navigator;

pub use error::{NavigationError, NavigationResult};
pub use history::{History, HistoryStep, MemoryHistory};
pub use navigator::{Navigator, RenderFn, Resolution, NOT_FOUND_TITLE};
