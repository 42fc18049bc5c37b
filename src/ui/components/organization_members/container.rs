use super::error_banner::ErrorBanner;
use super::loading::OrganizationLoading;
use super::page::{FetchRequest, OrganizationMembers};
use crate::ui::use_members_context;
use dioxus::prelude::*;
use tracing::debug;

/// Connects the members page to the shared store and fetch actions
#[component]
pub fn OrganizationMembersPage(organization_key: ReadSignal<String>) -> Element {
    let members_ctx = use_members_context();
    let store = members_ctx.store;
    let actions = members_ctx.actions();

    // Load organization details when we don't have them yet
    {
        let actions = actions.clone();
        use_effect(move || {
            let key = organization_key();
            if store.peek().organization(&key).is_some() {
                return;
            }
            let actions = actions.clone();
            spawn(async move {
                // Failures are logged and recorded in the store by the action
                let _ = actions.fetch_organization(&key).await;
            });
        });
    }

    let fetch_members = {
        let actions = actions.clone();
        move |request: FetchRequest| {
            let actions = actions.clone();
            spawn(async move {
                let _ = actions
                    .fetch_members(&request.organization_key, request.query.as_deref())
                    .await;
            });
        }
    };

    let fetch_more_members = {
        let actions = actions.clone();
        move |request: FetchRequest| {
            let actions = actions.clone();
            spawn(async move {
                let _ = actions
                    .fetch_more_members(&request.organization_key, request.query.as_deref())
                    .await;
            });
        }
    };

    let key = organization_key();
    let (organization, members, state) = {
        let store = store.read();
        (
            store.organization(&key).cloned(),
            store.members(&key).to_vec(),
            store.state(&key),
        )
    };
    debug!(
        "Members container for '{}': {} members, state {:?}",
        key,
        members.len(),
        state
    );

    rsx! {
        ErrorBanner { store }
        match organization {
            None => rsx! {
                OrganizationLoading {}
            },
            Some(organization) => rsx! {
                OrganizationMembers {
                    key: "{organization.key}",
                    members,
                    state,
                    organization,
                    fetch_organization_members: fetch_members,
                    fetch_more_organization_members: fetch_more_members,
                }
            },
        }
    }
}
