use dioxus::prelude::*;

use crate::{icons, Icon};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or on the close mark triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                span {
                    class: "close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: icons::FaXmark, width: 14, height: 14 }
                }
                {children}
            }
        }
    }
}
