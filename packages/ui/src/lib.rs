//! # UI crate: client state and components for the signup board
//!
//! The state layer is plain Rust and runs without a renderer:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionStore`]: login, logout, restore on page load |
//! | [`roster`] | [`RosterCache`]: last fetched activity list |
//! | [`gateway`] | [`ActionGateway`]: authorized signup / unregister |
//! | [`banner`] | [`StatusBanner`]: transient status message with dismissal tickets |
//! | [`view`] | [`project`]: the full page projection |
//! | [`board`] | [`Board`]: ties the above together for one page |
//!
//! [`components`] renders a [`BoardView`] with Dioxus and feeds user events back
//! into the [`Board`].

use dioxus::prelude::*;

pub mod banner;
pub mod board;
pub mod components;
pub mod error;
pub mod gateway;
pub mod roster;
pub mod session;
pub mod view;

mod token_store;
pub use token_store::{make_token_store, PlatformTokenStore};

#[cfg(test)]
mod testing;

pub use banner::{Banner, BannerKind, BannerTicket, StatusBanner};
pub use board::{ActionReport, Board};
pub use components::{
    use_board, ActivityList, BoardContext, BoardProvider, LoginModal, SignupForm,
    StatusMessage, UserMenu,
};
pub use error::ActionError;
pub use gateway::{ActionGateway, ActionKind, PendingAction};
pub use roster::{RosterCache, RosterState};
pub use session::{Session, SessionStore};
pub use view::{project, BoardView};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const BOARD_CSS: Asset = asset!("/assets/board.css");
