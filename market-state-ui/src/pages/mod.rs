//! Pages
//!
//! Top-level view components, one per route.

pub mod analysis;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod register;
pub mod settings;
pub mod symbol_detail;
pub mod trade_journal;

pub use analysis::Analysis;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use settings::Settings;
pub use symbol_detail::SymbolDetail;
pub use trade_journal::TradeJournal;
