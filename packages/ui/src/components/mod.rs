//! Dioxus components for the signup board page.

mod activity_list;
mod login_modal;
mod modal_overlay;
mod provider;
mod signup_form;
mod status_message;
mod user_menu;

pub use activity_list::ActivityList;
pub use login_modal::LoginModal;
pub use modal_overlay::ModalOverlay;
pub(crate) use provider::sleep;
pub use provider::{use_board, BoardContext, BoardProvider, PageBoard};
pub use signup_form::SignupForm;
pub use status_message::StatusMessage;
pub use user_menu::UserMenu;
