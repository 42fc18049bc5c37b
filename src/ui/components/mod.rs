pub mod app;
pub mod home;
pub mod navbar;
pub mod organization_members;

pub use app::App;
pub use home::Home;
pub use navbar::Navbar;
pub use organization_members::OrganizationMembersPage;
