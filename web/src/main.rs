use dioxus::prelude::*;

use ui::views::Home;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The navbar re-renders its own labels on a language switch, so unlike
    // the desktop shell no language-code context is provided here.
    ui::i18n::init();

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Title { "Loguardian" }

        Home {}
    }
}
