//! Teacher login overlay.
//!
//! Anonymous sessions see the credentials form; authenticated ones see who is
//! logged in and a logout button. The inline message under the form is owned by
//! the board and stays until the overlay closes.

use dioxus::prelude::*;

use super::{sleep, use_board, ModalOverlay};

#[component]
pub fn LoginModal() -> Element {
    let board = use_board();
    let view = board.view();

    if !view.login.open {
        return rsx! {};
    }
    let who = view.user.username.clone().unwrap_or_default();

    let on_close = {
        let board = board.clone();
        move |_| {
            board.board().close_login();
            board.touch();
        }
    };

    let on_submit = {
        let board = board.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let board = board.clone();
            let login = board.board().view().login;
            spawn(async move {
                let result = board.board().login(&login.username, &login.password).await;
                board.touch();
                if result.is_ok() {
                    sleep(board.board().login_close_delay()).await;
                    board.board().finish_login().await;
                    board.touch();
                }
            });
        }
    };

    let on_username = {
        let board = board.clone();
        move |evt: FormEvent| {
            board.board().set_login_username(&evt.value());
            board.touch();
        }
    };

    let on_password = {
        let board = board.clone();
        move |evt: FormEvent| {
            board.board().set_login_password(&evt.value());
            board.touch();
        }
    };

    let on_logout = {
        let board = board.clone();
        move |_| {
            let board = board.clone();
            spawn(async move {
                board.board().logout().await;
                board.touch();
            });
        }
    };

    rsx! {
        ModalOverlay {
            on_close,
            if view.login.show_form {
                h3 { "Teacher Login" }
                form {
                    id: "login-form",
                    onsubmit: on_submit,
                    div {
                        class: "form-group",
                        label { r#for: "username", "Username:" }
                        input {
                            id: "username",
                            r#type: "text",
                            value: view.login.username.clone(),
                            oninput: on_username,
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "password", "Password:" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: view.login.password.clone(),
                            oninput: on_password,
                        }
                    }
                    button { r#type: "submit", "Login" }
                }
            } else {
                div {
                    id: "logged-in-status",
                    p {
                        "Logged in as: "
                        strong { "{who}" }
                    }
                    button { id: "logout-btn", onclick: on_logout, "Logout" }
                }
            }
            if let Some(message) = view.login.message {
                div { id: "login-message", class: message.class(), "{message.message}" }
            }
        }
    }
}
