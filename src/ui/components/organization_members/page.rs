use super::list_footer::ListFooter;
use super::members_list::MembersList;
use super::page_header::PageHeader;
use super::users_search::UsersSearch;
use crate::members_page::{footer_model, MembersFetcher, MembersPageCoordinator};
use crate::models::{FetchState, Member, Organization};
use dioxus::prelude::*;
use tracing::debug;

/// Arguments of a fetch request emitted by the members page
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub organization_key: String,
    pub query: Option<String>,
}

impl FetchRequest {
    fn new(organization_key: &str, query: Option<&str>) -> Self {
        Self {
            organization_key: organization_key.to_string(),
            query: query.map(str::to_string),
        }
    }
}

/// Routes coordinator fetches to a pair of request callbacks
#[derive(Clone, Copy)]
struct CallbackFetcher<M, N> {
    fetch_members: M,
    fetch_more_members: N,
}

impl<M, N> MembersFetcher for CallbackFetcher<M, N>
where
    M: Fn(FetchRequest),
    N: Fn(FetchRequest),
{
    fn fetch_members(&self, organization_key: &str, query: Option<&str>) {
        (self.fetch_members)(FetchRequest::new(organization_key, query));
    }

    fn fetch_more_members(&self, organization_key: &str, query: Option<&str>) {
        (self.fetch_more_members)(FetchRequest::new(organization_key, query));
    }
}

/// Members of an organization with search and "show more"
///
/// Reads members and fetch state from its props and only asks the two
/// handlers for data.
#[component]
pub fn OrganizationMembers(
    members: Vec<Member>,
    state: FetchState,
    organization: Organization,
    fetch_organization_members: EventHandler<FetchRequest>,
    fetch_more_organization_members: EventHandler<FetchRequest>,
) -> Element {
    debug!("Rendering members of '{}'", organization.key);
    let mut coordinator = use_signal(MembersPageCoordinator::new);
    let fetcher = CallbackFetcher {
        fetch_members: move |request: FetchRequest| fetch_organization_members.call(request),
        fetch_more_members: move |request: FetchRequest| {
            fetch_more_organization_members.call(request)
        },
    };

    // Runs once after the first render; nothing read here is reactive
    {
        let organization_key = organization.key.clone();
        let members = members.clone();
        let state = state.clone();
        use_effect(move || {
            coordinator
                .write()
                .on_first_display(&organization_key, &members, &state, &fetcher);
        });
    }

    let on_search = {
        let organization_key = organization.key.clone();
        move |query: String| {
            coordinator.write().search(&organization_key, query, &fetcher);
        }
    };

    let on_load_more = {
        let organization_key = organization.key.clone();
        let state = state.clone();
        move |_: ()| {
            coordinator.peek().load_more(&organization_key, &state, &fetcher);
        }
    };

    let footer = footer_model(&members, &state);

    rsx! {
        div { class: "container mx-auto p-6 max-w-4xl",
            PageHeader {
                organization: organization.clone(),
                loading: state.loading,
                total: state.total,
            }
            UsersSearch { on_search }
            MembersList { members: members.clone(), organization: organization.clone() }
            if let Some(footer) = footer {
                ListFooter {
                    count: footer.count,
                    total: footer.total,
                    ready: footer.ready,
                    load_more: on_load_more,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::member;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Sent = Rc<RefCell<Vec<(&'static str, FetchRequest)>>>;

    fn recording_fetcher(
        sent: &Sent,
    ) -> CallbackFetcher<impl Fn(FetchRequest), impl Fn(FetchRequest)> {
        let members_sent = sent.clone();
        let more_sent = sent.clone();
        CallbackFetcher {
            fetch_members: move |request: FetchRequest| {
                members_sent.borrow_mut().push(("members", request))
            },
            fetch_more_members: move |request: FetchRequest| {
                more_sent.borrow_mut().push(("more", request))
            },
        }
    }

    fn request(query: Option<&str>) -> FetchRequest {
        FetchRequest::new("acme", query)
    }

    #[test]
    fn test_first_display_sends_one_unfiltered_request() {
        let sent = Sent::default();
        let fetcher = recording_fetcher(&sent);
        let mut coordinator = MembersPageCoordinator::new();

        coordinator.on_first_display("acme", &[], &FetchState::default(), &fetcher);

        assert_eq!(*sent.borrow(), vec![("members", request(None))]);
    }

    #[test]
    fn test_first_display_of_loaded_page_sends_nothing() {
        let sent = Sent::default();
        let fetcher = recording_fetcher(&sent);
        let mut coordinator = MembersPageCoordinator::new();
        let state = FetchState {
            total: Some(1),
            page_index: Some(1),
            ..Default::default()
        };

        coordinator.on_first_display("acme", &[member("ada")], &state, &fetcher);

        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn test_search_goes_to_members_callback() {
        let sent = Sent::default();
        let fetcher = recording_fetcher(&sent);
        let mut coordinator = MembersPageCoordinator::new();

        coordinator.search("acme", "alice".to_string(), &fetcher);

        assert_eq!(*sent.borrow(), vec![("members", request(Some("alice")))]);
    }

    #[test]
    fn test_load_more_goes_to_more_callback_with_store_query() {
        let sent = Sent::default();
        let fetcher = recording_fetcher(&sent);
        let coordinator = MembersPageCoordinator::new();
        let state = FetchState {
            query: Some("bob".to_string()),
            total: Some(80),
            page_index: Some(1),
            ..Default::default()
        };

        coordinator.load_more("acme", &state, &fetcher);

        assert_eq!(*sent.borrow(), vec![("more", request(Some("bob")))]);
    }
}
