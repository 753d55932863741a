use dioxus::prelude::*;

use super::use_board;
use crate::{icons, Icon};

/// Header icon that opens the login overlay.
#[component]
pub fn UserMenu() -> Element {
    let board = use_board();
    let view = board.view();

    let class = if view.user.authenticated {
        "user-icon logged-in"
    } else {
        "user-icon"
    };

    rsx! {
        button {
            class,
            title: view.user.title,
            onclick: move |_| {
                board.board().open_login();
                board.touch();
            },
            Icon { icon: icons::FaUser, width: 16, height: 16 }
        }
    }
}
