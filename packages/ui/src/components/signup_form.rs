use dioxus::prelude::*;

use super::{use_board, StatusMessage};

/// Signup form: student email plus activity selector. The submit button is
/// only enabled for an authenticated teacher.
#[component]
pub fn SignupForm() -> Element {
    let board = use_board();
    let mut email = use_signal(String::new);
    let mut activity = use_signal(String::new);
    let view = board.view();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let board = board.clone();
        let (name, address) = (activity(), email());
        spawn(async move {
            let report = board.board().signup(&name, &address).await;
            if report.is_success() {
                email.set(String::new());
                activity.set(String::new());
            }
            board.report(report);
        });
    };

    rsx! {
        section {
            id: "signup-container",
            h3 { "Sign Up for an Activity" }
            form {
                id: "signup-form",
                onsubmit: on_submit,
                div {
                    class: "form-group",
                    label { r#for: "email", "Student Email:" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "student@school.edu",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "activity", "Select Activity:" }
                    select {
                        id: "activity",
                        value: activity(),
                        onchange: move |evt: FormEvent| activity.set(evt.value()),
                        option { value: "", "-- Select an activity --" }
                        for name in view.signup.options.iter() {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: !view.signup.enabled,
                    "{view.signup.label}"
                }
            }
            StatusMessage {}
        }
    }
}
