//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod confirm;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use confirm::ConfirmDialog;
pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toast::Toast;
