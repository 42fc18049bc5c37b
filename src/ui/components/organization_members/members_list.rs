use super::members_list_item::MembersListItem;
use crate::models::{Member, Organization};
use dioxus::prelude::*;

#[component]
pub fn MembersList(members: Vec<Member>, organization: Organization) -> Element {
    if members.is_empty() {
        return rsx! {
            div { class: "text-center py-8 text-gray-500", "No members in {organization.name}" }
        };
    }

    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full border-collapse bg-white rounded-lg shadow text-left",
                tbody { class: "divide-y divide-gray-200",
                    for member in members.iter() {
                        MembersListItem {
                            key: "{member.login}",
                            member: member.clone(),
                        }
                    }
                }
            }
        }
    }
}
