use dioxus::prelude::*;
use std::time::Duration;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);
pub const MIN_QUERY_LENGTH: usize = 2;

/// Queries are submitted when cleared or at least [`MIN_QUERY_LENGTH`] chars long
pub fn is_submittable(query: &str) -> bool {
    query.is_empty() || query.chars().count() >= MIN_QUERY_LENGTH
}

/// Tracks which typed text is still the latest.
///
/// Every keystroke takes a new ticket, so a pending submit only fires when
/// nothing was typed after it, whether or not the newer text is submittable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchDebouncer {
    generation: u64,
}

impl SearchDebouncer {
    /// Record a keystroke; returns the ticket to submit with if the text may be searched
    pub fn input(&mut self, query: &str) -> Option<u64> {
        self.generation += 1;
        is_submittable(query).then_some(self.generation)
    }

    /// Submit right away (Enter), superseding any pending ticket
    pub fn submit_now(&mut self, query: &str) -> bool {
        self.generation += 1;
        is_submittable(query)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Submit after the debounce window, unless a newer keystroke superseded it
fn submit_debounced(
    debouncer: Signal<SearchDebouncer>,
    on_search: EventHandler<String>,
    ticket: u64,
    query: String,
) {
    spawn(async move {
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        if debouncer.peek().is_current(ticket) {
            on_search.call(query);
        }
    });
}

/// Search box reporting a login/name query
#[component]
pub fn UsersSearch(on_search: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);
    let mut debouncer = use_signal(SearchDebouncer::default);
    let too_short = !is_submittable(&query.read());

    rsx! {
        div { class: "mb-6",
            input {
                class: "w-full p-3 border border-gray-300 rounded-lg",
                r#type: "search",
                placeholder: "Search by login or name...",
                value: "{query}",
                oninput: move |event: FormEvent| {
                    let value = event.value();
                    query.set(value.clone());
                    let ticket = debouncer.write().input(&value);
                    if let Some(ticket) = ticket {
                        submit_debounced(debouncer, on_search, ticket, value);
                    }
                },
                onkeydown: move |event: KeyboardEvent| {
                    if event.key() == Key::Enter {
                        let value = query.read().clone();
                        let submit = debouncer.write().submit_now(&value);
                        if submit {
                            on_search.call(value);
                        }
                    }
                },
            }
            if too_short {
                p { class: "text-sm text-gray-500 mt-1",
                    "Type at least {MIN_QUERY_LENGTH} characters to search"
                }
            }
        }
    }
}
