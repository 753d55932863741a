//! Board context and hooks for the components.
//!
//! [`BoardProvider`] builds the page's [`Board`] once and shares it through a
//! [`BoardContext`]. The board's containers are plain shared cells, so Dioxus
//! does not see their changes; every handler calls [`BoardContext::touch`] after
//! a mutation and components subscribe through [`BoardContext::view`].

use std::time::Duration;

use api::HttpBoardApi;
use dioxus::prelude::*;
use store::BoardConfig;

use crate::board::{ActionReport, Board};
use crate::token_store::{make_token_store, PlatformTokenStore};
use crate::view::{BoardView, ROSTER_FAILED};

pub type PageBoard = Board<HttpBoardApi, PlatformTokenStore>;

/// Handle shared by every component on the page.
#[derive(Clone)]
pub struct BoardContext {
    board: PageBoard,
    revision: Signal<u64>,
}

impl PartialEq for BoardContext {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
    }
}

impl BoardContext {
    pub fn board(&self) -> &PageBoard {
        &self.board
    }

    /// Current projection. Subscribes the calling component to re-renders.
    pub fn view(&self) -> BoardView {
        let _ = self.revision.read();
        self.board.view()
    }

    /// Re-render everything that called [`view`](Self::view).
    pub fn touch(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }

    /// Show an action's outcome and start its dismissal timer.
    pub fn report(&self, report: ActionReport) {
        self.touch();
        let ctx = self.clone();
        let lifetime = self.board.banner_lifetime();
        spawn(async move {
            sleep(lifetime).await;
            if ctx.board.expire_banner(report.ticket) {
                ctx.touch();
            }
        });
    }
}

/// Get the board context provided by [`BoardProvider`].
pub fn use_board() -> BoardContext {
    use_context::<BoardContext>()
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Provider component that owns the page's board state.
///
/// `config.api.base_url` must be absolute; the platform entry point resolves an
/// empty value against its own origin before mounting.
#[component]
pub fn BoardProvider(config: BoardConfig, children: Element) -> Element {
    let revision = use_signal(|| 0u64);
    let context = use_hook(move || match HttpBoardApi::new(&config.api.base_url) {
        Ok(api) => Some(BoardContext {
            board: Board::new(api, make_token_store(&config), &config),
            revision,
        }),
        Err(e) => {
            tracing::error!("Invalid board server address: {}", e);
            None
        }
    });

    match context {
        Some(context) => rsx! {
            BoardScope { context, {children} }
        },
        None => rsx! {
            p { class: "error", "{ROSTER_FAILED}" }
        },
    }
}

#[component]
fn BoardScope(context: BoardContext, children: Element) -> Element {
    use_context_provider(|| context.clone());

    // Page load: restore the session, then fetch the roster
    use_hook(move || {
        spawn(async move {
            context.board().init().await;
            context.touch();
        });
    });

    rsx! {
        {children}
    }
}
