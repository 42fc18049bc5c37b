use crate::store::MembersStore;
use dioxus::prelude::*;

/// Last fetch failure recorded in the store, dismissible
#[component]
pub fn ErrorBanner(store: Signal<MembersStore>) -> Element {
    let mut store = store;
    let Some(message) = store.read().last_error().map(str::to_string) else {
        return rsx! {};
    };

    rsx! {
        div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4 flex justify-between",
            span { "{message}" }
            button {
                class: "ml-4 font-bold",
                onclick: move |_| store.write().clear_error(),
                "×"
            }
        }
    }
}
