use dioxus::prelude::*;

use super::use_board;

/// The transient status banner under the signup form.
#[component]
pub fn StatusMessage() -> Element {
    let view = use_board().view();

    match view.banner {
        Some(banner) => rsx! {
            div { id: "message", class: banner.class(), "{banner.message}" }
        },
        None => rsx! {},
    }
}
