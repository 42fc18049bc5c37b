pub mod app;
pub mod app_context;
pub mod components;
pub mod members_context;

pub use app::*;
pub use app_context::AppContext;
pub use components::*;
pub use members_context::{use_members_context, MembersContext, MembersContextProvider};
