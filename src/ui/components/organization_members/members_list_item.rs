use crate::models::Member;
use dioxus::prelude::*;

const AVATAR_SIZE: u32 = 36;

fn group_label(group_count: Option<u32>) -> String {
    match group_count {
        Some(1) => "1 group".to_string(),
        Some(count) => format!("{} groups", count),
        None => "no groups".to_string(),
    }
}

#[component]
pub fn MembersListItem(member: Member) -> Element {
    let avatar_url = member.avatar_url(AVATAR_SIZE);
    let display_name = member.display_name().to_string();
    let groups = group_label(member.group_count);

    rsx! {
        tr { class: "hover:bg-gray-50",
            td { class: "px-4 py-3 w-12",
                img {
                    class: "rounded-full",
                    src: "{avatar_url}",
                    width: "{AVATAR_SIZE}",
                    height: "{AVATAR_SIZE}",
                    alt: "{member.login}",
                }
            }
            td { class: "px-4 py-3",
                div { class: "font-semibold", "{display_name}" }
                div { class: "text-gray-500 text-xs mt-1", "{member.login}" }
            }
            td { class: "px-4 py-3 text-sm text-gray-500 text-right", "{groups}" }
        }
    }
}
