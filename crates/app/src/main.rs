use dioxus::prelude::*;

mod config;
mod routes;

use routes::PantryPage;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Config logging needs the subscriber that launch installs.
    use_hook(config::load_config);

    rsx! {
        PantryPage {}
    }
}
