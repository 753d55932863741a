use dioxus::prelude::*;

use store::BoardConfig;
use ui::{ActivityList, BoardProvider, LoginModal, SignupForm, UserMenu, BOARD_CSS};

const BOARD_TOML: &str = include_str!("../board.toml");

/// Address used by native builds when `base_url` is left empty.
#[cfg(not(target_arch = "wasm32"))]
const LOCAL_SERVER: &str = "http://localhost:8000";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the embedded config and fill in the server address.
fn load_config() -> BoardConfig {
    let config = BoardConfig::from_toml(BOARD_TOML).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid {}: {}", BoardConfig::filename(), e);
        BoardConfig::default()
    });
    if config.api.base_url.is_empty() {
        let origin = page_origin();
        tracing::debug!("Using {} as board server", origin);
        config.with_base_url(origin)
    } else {
        config
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    LOCAL_SERVER.to_string()
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Title { "Extracurricular Activities" }
        document::Link { rel: "stylesheet", href: BOARD_CSS }

        BoardProvider {
            config,
            header {
                UserMenu {}
                h1 { "Extracurricular Activities" }
                p { "Browse activities and manage student signups" }
            }
            main {
                section {
                    id: "activities-container",
                    h3 { "Available Activities" }
                    ActivityList {}
                }
                SignupForm {}
            }
            LoginModal {}
        }
    }
}
