use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::icon::NavIcon;
use crate::core::entries::{ACCENT_COLOR, BRAND_NAME, MORE_ENTRIES, NAV_ENTRIES, VERSION};
use crate::core::icons::IconId;
use crate::core::menu::{MenuEvent, MenuState, Panel};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Responsive navigation bar.
///
/// Wide viewports get the inline link row, the "More" dropdown and the
/// badges; narrow ones get a toggle control that expands the mobile panel.
/// Which layout is visible is decided by the stylesheet; the mobile panel
/// itself is only in the tree while the menu is open.
///
/// Takes no props. If the host provides a `Signal<String>` language code as
/// context, the locale selector keeps it in sync.
#[component]
pub fn NavBar() -> Element {
    let menu = use_signal(MenuState::default);
    rsx! { NavBarLayout { menu } }
}

/// Markup of [`NavBar`] driven by the menu signal it owns.
#[component]
fn NavBarLayout(menu: Signal<MenuState>) -> Element {
    i18n::init();

    let mut menu = menu;
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_lang_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("could not switch language to {val}: {err}"),
        }
    };

    // Reading the signals here subscribes this scope, so labels are re-fetched
    // from the loader on every menu or language change.
    let state = menu();
    let lang = current_lang();
    let panel = state.panel(NAV_ENTRIES);
    let toggle_label = t!("nav-toggle-menu");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        div { class: "navbar-frame",
            nav {
                id: "navbar",
                class: "navbar",
                style: "background-color: {ACCENT_COLOR}",
                "data-lang": "{lang}",
                div { class: "navbar__inner",
                    div { class: "navbar__brand",
                        NavIcon { id: IconId::Shield, class: "navbar__brand-icon" }
                        span { class: "navbar__brand-mark", "{BRAND_NAME}" }
                    }

                    // Desktop row
                    div { class: "navbar__desktop",
                        ul { class: "navbar__links",
                            for entry in NAV_ENTRIES.iter() {
                                li { key: "{entry.id}", class: "navbar__item",
                                    a { class: "navbar__link", "data-entry": entry.id,
                                        NavIcon { id: entry.icon, class: "navbar__link-icon" }
                                        span { {entry.label()} }
                                    }
                                }
                            }
                            MoreDropdown {}
                        }
                        StatusBadges {}
                        if show_switcher {
                            div { class: "navbar__locale",
                                label {
                                    class: "visually-hidden",
                                    r#for: "locale-select",
                                    {t!("nav-language-label")}
                                }
                                select {
                                    id: "locale-select",
                                    value: "{lang}",
                                    oninput: on_lang_change,
                                    for code in langs().into_iter() {
                                        option { key: "{code}", value: "{code}", "{code}" }
                                    }
                                }
                            }
                        }
                    }

                    // Mobile toggle
                    div { class: "navbar__toggle-wrap",
                        button {
                            r#type: "button",
                            class: "navbar__toggle",
                            aria_label: "{toggle_label}",
                            aria_expanded: "{state.is_open()}",
                            aria_controls: "navbar-mobile-panel",
                            onclick: move |_| {
                                menu.write().apply(MenuEvent::Toggle);
                            },
                            NavIcon { id: state.toggle_icon(), class: "navbar__toggle-icon" }
                        }
                    }
                }

                if let Panel::Expanded(items) = panel {
                    div { id: "navbar-mobile-panel", class: "navbar__mobile",
                        div { class: "navbar__mobile-items",
                            for item in items {
                                MobileNavItem {
                                    key: "{item.id()}",
                                    icon: item.icon(),
                                    label: item.label(),
                                    onactivate: move |_| {
                                        menu.write().apply(item.activation());
                                    },
                                }
                            }
                        }
                        div { class: "navbar__mobile-badges", StatusBadges {} }
                    }
                }
            }
        }
    }
}

/// Keys that activate a focused row, as for a native button.
fn activates_row(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// One activatable row of the mobile panel; reacts to clicks and to Enter or
/// Space while focused.
#[component]
fn MobileNavItem(icon: IconId, label: String, onactivate: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "navbar__mobile-item",
            role: "link",
            tabindex: "0",
            onclick: move |_| onactivate.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if activates_row(&evt.key()) {
                    evt.prevent_default();
                    onactivate.call(());
                }
            },
            NavIcon { id: icon, class: "navbar__link-icon" }
            span { "{label}" }
        }
    }
}

/// Desktop "More" trigger with its descriptive grid.
///
/// Runs on its own `MenuState`: the trigger toggles it, leaving the dropdown
/// or following one of its links closes it.
#[component]
fn MoreDropdown() -> Element {
    let mut dropdown = use_signal(MenuState::default);
    let open = dropdown().is_open();

    rsx! {
        li {
            class: "navbar__item navbar__more",
            onmouseleave: move |_| dropdown.write().close(),
            button {
                r#type: "button",
                class: "navbar__more-trigger",
                aria_expanded: "{open}",
                aria_haspopup: "true",
                onclick: move |_| {
                    dropdown.write().apply(MenuEvent::Toggle);
                },
                {t!("nav-more")}
            }
            if open {
                ul { class: "navbar__more-grid",
                    for entry in MORE_ENTRIES.iter() {
                        li { key: "{entry.href}",
                            a {
                                class: "navbar__more-link",
                                href: entry.href,
                                onclick: move |_| {
                                    dropdown.write().apply(MenuEvent::EntryActivated(entry.href));
                                },
                                div { class: "navbar__more-title", {entry.title()} }
                                p { class: "navbar__more-description", {entry.description()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBadges() -> Element {
    rsx! {
        span { class: "badge badge--version", "v{VERSION}" }
        span { class: "badge badge--verified",
            NavIcon { id: IconId::CheckCircle, class: "badge__icon" }
            {t!("badge-verified")}
        }
    }
}
