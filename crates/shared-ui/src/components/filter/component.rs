use dioxus::prelude::*;
use shared_types::CategoryOption;

/// Text search box paired with a category dropdown.
///
/// Fully controlled: the input always shows `search` and the dropdown always
/// selects the option whose value equals `selected_category` (none, if no
/// option matches). The component keeps no copy of either value.
///
/// Edits to the text field call `on_search_change` with the new text as-is.
/// Selection changes call `on_category_change` with the raw change event, so
/// callers read the value with `evt.value()`.
#[component]
pub fn Filter(
    /// Text shown in the search field.
    search: String,
    /// Called on every edit with the field's new text.
    on_search_change: EventHandler<String>,
    /// Value of the selected category option.
    selected_category: String,
    /// Called on every selection change with the change event.
    on_category_change: EventHandler<FormEvent>,
    /// Dropdown entries. The first entry is the "no filter" sentinel.
    #[props(default = CategoryOption::defaults())]
    options: Vec<CategoryOption>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "Filter",
            input {
                r#type: "text",
                name: "search",
                placeholder: placeholder,
                value: search,
                oninput: move |evt: FormEvent| on_search_change.call(evt.value()),
            }
            // `value` alone selects nothing in server-rendered markup.
            select {
                name: "filter",
                value: selected_category.clone(),
                onchange: move |evt: FormEvent| on_category_change.call(evt),
                for (i, opt) in options.iter().enumerate() {
                    option {
                        key: "{i}-{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected_category,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
