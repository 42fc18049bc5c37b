use crate::ui::{MembersContextProvider, Route, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        MembersContextProvider {
            Router::<Route> {}
        }
    }
}
