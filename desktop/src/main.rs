use dioxus::prelude::*;

use ui::views::Home;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::BASE_CSS }
        Home {}
    }
}
