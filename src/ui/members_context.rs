use crate::actions::MembersActions;
use crate::api::MembersApi;
use crate::store::MembersStore;
use crate::ui::AppContext;
use dioxus::prelude::*;
use std::sync::Arc;

/// Shared members store plus what is needed to fill it
#[derive(Clone)]
pub struct MembersContext {
    pub store: Signal<MembersStore>,
    api: Arc<dyn MembersApi>,
    page_size: u32,
}

impl MembersContext {
    pub fn actions(&self) -> MembersActions<Signal<MembersStore>> {
        MembersActions::new(self.api.clone(), self.store).with_page_size(self.page_size)
    }
}

/// Provider component to make the members store available throughout the app
#[component]
pub fn MembersContextProvider(children: Element) -> Element {
    let app_context = use_context::<AppContext>();
    let store = use_signal(MembersStore::new);

    use_context_provider(|| MembersContext {
        store,
        api: app_context.api.clone(),
        page_size: app_context.config.page_size,
    });

    rsx! {
        {children}
    }
}

/// Hook to access the members store and actions
pub fn use_members_context() -> MembersContext {
    use_context::<MembersContext>()
}
