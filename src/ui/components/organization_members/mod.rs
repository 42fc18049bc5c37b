mod container;
mod error_banner;
mod list_footer;
mod loading;
mod members_list;
mod members_list_item;
mod page;
mod page_header;
pub mod users_search;

pub use container::OrganizationMembersPage;
pub use page::{FetchRequest, OrganizationMembers};
