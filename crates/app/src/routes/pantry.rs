use dioxus::prelude::*;
use shared_ui::Filter;

use crate::config::filter_config;

/// Owns the filter state and renders the controlled `Filter` over it.
#[component]
pub fn PantryPage() -> Element {
    let config = use_hook(filter_config);
    let default_category = config.default_category.as_str();

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| default_category.to_string());

    rsx! {
        div { class: "pantry",
            h1 { "Pantry" }
            Filter {
                search: search.read().clone(),
                on_search_change: move |value: String| {
                    tracing::debug!(%value, "search changed");
                    search.set(value);
                },
                selected_category: category.read().clone(),
                on_category_change: move |evt: FormEvent| {
                    let value = evt.value();
                    tracing::debug!(%value, "category changed");
                    category.set(value);
                },
                options: config.categories.clone(),
                placeholder: config.placeholder.clone(),
            }
            p { class: "pantry-summary",
                "Search: {search} | Category: {category}"
            }
        }
    }
}
