use dioxus::prelude::*;

/// "{count} of {total} shown" with a button for the next page
#[component]
pub fn ListFooter(count: usize, total: u64, ready: bool, load_more: EventHandler<()>) -> Element {
    let has_more = (count as u64) < total;

    rsx! {
        footer { class: "flex items-center justify-center gap-4 py-4 text-sm text-gray-600",
            span { "{count} of {total} shown" }
            if !ready {
                div { class: "animate-spin rounded-full h-4 w-4 border-b-2 border-blue-500" }
            } else if has_more {
                button {
                    class: "px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700",
                    onclick: move |_| load_more.call(()),
                    "Show more"
                }
            }
        }
    }
}
