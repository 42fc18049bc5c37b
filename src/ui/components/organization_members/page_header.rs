use crate::models::Organization;
use dioxus::prelude::*;

/// Title row: organization, spinner while loading, member total once known
#[component]
pub fn PageHeader(organization: Organization, loading: bool, total: Option<u64>) -> Element {
    rsx! {
        header { class: "flex items-center justify-between mb-6",
            div {
                h1 { class: "text-3xl font-bold", "Members" }
                p { class: "text-gray-500 mt-1", "{organization.name}" }
            }
            div { class: "flex items-center gap-3",
                if loading {
                    div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-blue-500" }
                }
                if let Some(total) = total {
                    span { class: "text-gray-600",
                        if total == 1 {
                            "1 member"
                        } else {
                            "{total} members"
                        }
                    }
                }
            }
        }
    }
}
