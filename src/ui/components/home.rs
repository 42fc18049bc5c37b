use crate::ui::{AppContext, Route};
use dioxus::prelude::*;

/// Start page: sends the user to the configured organization's members
#[component]
pub fn Home() -> Element {
    let app_context = use_context::<AppContext>();
    let nav = navigator();

    use_effect(move || {
        nav.replace(Route::OrganizationMembersPage {
            organization_key: app_context.config.organization.clone(),
        });
    });

    rsx! {}
}
