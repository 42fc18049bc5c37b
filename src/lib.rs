// Library exports for integration tests and reusable components

pub mod actions;
pub mod api;
pub mod config;
pub mod members_page;
pub mod models;
pub mod store;

// Dioxus desktop UI (hidden from docs)
#[doc(hidden)]
pub mod ui;

pub use members_page::{MembersFetcher, MembersPageCoordinator};
pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
