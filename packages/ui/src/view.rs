//! # Rendered projection
//!
//! [`project`] derives everything the page shows from the current session,
//! roster, banner and login overlay. Nothing here is stored: after any change the
//! whole [`BoardView`] is rebuilt and handed to the components, which only read it.
//!
//! Authentication gates two things in the projection:
//!
//! - the signup submit control (`enabled`, and its label `"Sign Up"` vs `"Login Required"`)
//! - the per-participant remove buttons (`removable` on every [`ParticipantRow`])

use crate::banner::Banner;
use crate::roster::RosterState;
use crate::session::Session;

pub const SUBMIT_LABEL: &str = "Sign Up";
pub const LOGIN_REQUIRED_LABEL: &str = "Login Required";
pub const ROSTER_FAILED: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Login overlay state that is not derived from the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPrompt {
    pub open: bool,
    /// Inline form message; stays until replaced or the overlay closes.
    pub message: Option<Banner>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub user: UserBadge,
    pub login: LoginOverlay,
    pub signup: SignupControl,
    pub roster: RosterPanel,
    pub banner: Option<Banner>,
}

/// Header icon that opens the login overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub authenticated: bool,
    pub title: &'static str,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOverlay {
    pub open: bool,
    /// Credentials form when anonymous, "logged in as" + logout otherwise.
    pub show_form: bool,
    pub message: Option<Banner>,
    /// Current credential field values.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupControl {
    pub enabled: bool,
    pub label: &'static str,
    /// Activity selector entries in roster order.
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterPanel {
    Loading,
    Failed(&'static str),
    Activities(Vec<ActivityCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    /// Shown instead of the participants heading and list when nobody is
    /// signed up.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.participants.is_empty().then_some(NO_PARTICIPANTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub removable: bool,
}

/// Build the full page projection.
pub fn project(
    session: &Session,
    roster: &RosterState,
    banner: Option<Banner>,
    login: &LoginPrompt,
) -> BoardView {
    let authenticated = session.is_authenticated();

    let (panel, options) = match roster {
        RosterState::Loading => (RosterPanel::Loading, Vec::new()),
        RosterState::Failed => (RosterPanel::Failed(ROSTER_FAILED), Vec::new()),
        RosterState::Ready(roster) => {
            let cards = roster
                .iter()
                .map(|activity| ActivityCard {
                    name: activity.name.clone(),
                    description: activity.description.clone(),
                    schedule: activity.schedule.clone(),
                    spots_left: activity.spots_left(),
                    participants: activity
                        .participants
                        .iter()
                        .map(|email| ParticipantRow {
                            email: email.clone(),
                            removable: authenticated,
                        })
                        .collect(),
                })
                .collect();
            (RosterPanel::Activities(cards), roster.names())
        }
    };

    BoardView {
        user: UserBadge {
            authenticated,
            title: if authenticated {
                "Logged in as teacher"
            } else {
                "Login"
            },
            username: session.username().map(str::to_string),
        },
        login: LoginOverlay {
            open: login.open,
            show_form: !authenticated,
            message: login.message.clone(),
            username: login.username.clone(),
            password: login.password.clone(),
        },
        signup: SignupControl {
            enabled: authenticated,
            label: if authenticated {
                SUBMIT_LABEL
            } else {
                LOGIN_REQUIRED_LABEL
            },
            options,
        },
        roster: panel,
        banner,
    }
}
