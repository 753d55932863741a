use dioxus::prelude::*;

use super::use_board;
use crate::view::{ActivityCard, ParticipantRow, RosterPanel};
use crate::{icons, Icon};

/// The roster: one card per activity, in server order.
#[component]
pub fn ActivityList() -> Element {
    let view = use_board().view();

    rsx! {
        div {
            id: "activities-list",
            {match view.roster {
                RosterPanel::Loading => rsx! { p { "Loading activities..." } },
                RosterPanel::Failed(message) => rsx! { p { class: "error", "{message}" } },
                RosterPanel::Activities(cards) => rsx! {
                    for card in cards {
                        ActivityItem { key: "{card.name}", card }
                    }
                },
            }}
        }
    }
}

#[component]
fn ActivityItem(card: ActivityCard) -> Element {
    let availability = card.availability();

    rsx! {
        div {
            class: "activity-card",
            h4 { "{card.name}" }
            p { "{card.description}" }
            p {
                strong { "Schedule:" }
                " {card.schedule}"
            }
            p {
                strong { "Availability:" }
                " {availability}"
            }
            div {
                class: "participants-container",
                div {
                    class: "participants-section",
                    if let Some(placeholder) = card.placeholder() {
                        p { em { "{placeholder}" } }
                    } else {
                        h5 { "Participants:" }
                        ul {
                            class: "participants-list",
                            for row in card.participants.iter().cloned() {
                                ParticipantItem {
                                    key: "{row.email}",
                                    activity: card.name.clone(),
                                    row,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ParticipantItem(activity: String, row: ParticipantRow) -> Element {
    let board = use_board();

    let on_remove = {
        let email = row.email.clone();
        move |_| {
            let (board, activity, email) = (board.clone(), activity.clone(), email.clone());
            spawn(async move {
                let report = board.board().unregister(&activity, &email).await;
                board.report(report);
            });
        }
    };

    rsx! {
        li {
            span { class: "participant-email", "{row.email}" }
            if row.removable {
                button {
                    class: "delete-btn",
                    title: "Unregister",
                    onclick: on_remove,
                    Icon { icon: icons::FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}
