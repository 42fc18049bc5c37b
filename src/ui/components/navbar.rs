use crate::ui::{AppContext, Route};
use dioxus::prelude::*;

/// Layout component with the top bar above the routed content
#[component]
pub fn Navbar() -> Element {
    let app_context = use_context::<AppContext>();

    rsx! {
        div {
            id: "navbar",
            class: "bg-gray-800 text-white px-6 py-3 flex items-center justify-between",
            Link {
                to: Route::OrganizationMembersPage {
                    organization_key: app_context.config.organization.clone(),
                },
                class: "font-semibold hover:text-blue-300 transition-colors",
                "Members"
            }
            span { class: "text-sm text-gray-400", "{app_context.config.server_url}" }
        }
        Outlet::<Route> {}
    }
}
