//! In-process stand-in for the board server used by the core tests.
//!
//! [`FakeApi`] keeps a small mutable roster and one teacher account, applies
//! signups and removals like the real server, and records every call so tests
//! can assert which requests were (or were not) made.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use api::{ApiError, AuthCheck, BoardApi, LoginResponse, MessageResponse};
use store::{Activity, Roster};

pub(crate) const TOKEN: &str = "abc123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Activities,
    Login { username: String, password: String },
    Logout { token: String },
    CheckAuth { token: String },
    Signup { token: String, activity: String, email: String },
    Unregister { token: String, activity: String, email: String },
}

pub(crate) struct FakeApi {
    activities: RefCell<Vec<Activity>>,
    /// token -> username
    sessions: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
    roster_broken: Cell<bool>,
    next_error: RefCell<Option<ApiError>>,
    calls: RefCell<Vec<Call>>,
}

fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_string(),
        description: format!("{name} meets after school"),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

impl FakeApi {
    /// Three activities; "Chess Club" has `old@student.edu`, "Art Studio" is full.
    pub(crate) fn board() -> Self {
        Self {
            activities: RefCell::new(vec![
                activity("Chess Club", 12, &["old@student.edu"]),
                activity("Programming Class", 20, &["emma@mergington.edu"]),
                activity("Art Studio", 1, &["a@mergington.edu"]),
            ]),
            sessions: RefCell::new(HashMap::new()),
            offline: Cell::new(false),
            roster_broken: Cell::new(false),
            next_error: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Make `GET /activities` answer with a body that does not parse.
    pub(crate) fn break_roster(&self, broken: bool) {
        self.roster_broken.set(broken);
    }

    /// The next call of any kind fails with `error`.
    pub(crate) fn fail_next(&self, error: ApiError) {
        *self.next_error.borrow_mut() = Some(error);
    }

    /// Server-side revocation, e.g. token expiry.
    pub(crate) fn revoke(&self, token: &str) {
        self.sessions.borrow_mut().remove(token);
    }

    /// Server-side change made by someone else.
    pub(crate) fn add_participant(&self, name: &str, email: &str) {
        if let Some(a) = self.activities.borrow_mut().iter_mut().find(|a| a.name == name) {
            a.participants.push(email.to_string());
        }
    }

    pub(crate) fn participants(&self, name: &str) -> Vec<String> {
        self.activities
            .borrow()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }

    /// One simulated round trip: suspend once so concurrent operations can
    /// interleave, then record the call and apply injected failures.
    async fn enter(&self, call: Call) -> Result<(), ApiError> {
        tokio::task::yield_now().await;
        self.calls.borrow_mut().push(call);
        if let Some(e) = self.next_error.borrow_mut().take() {
            return Err(e);
        }
        if self.offline.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn authorize(&self, token: &str) -> Result<(), ApiError> {
        if self.sessions.borrow().contains_key(token) {
            Ok(())
        } else {
            Err(rejected(401, "Invalid or expired token"))
        }
    }
}

impl BoardApi for FakeApi {
    async fn activities(&self) -> Result<Roster, ApiError> {
        self.enter(Call::Activities).await?;
        if self.roster_broken.get() {
            return Err(ApiError::Decode("expected a map".to_string()));
        }
        Ok(Roster::new(self.activities.borrow().clone()))
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.enter(Call::Login {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await?;
        if username == "ms.smith" && password == "t3ach" {
            self.sessions
                .borrow_mut()
                .insert(TOKEN.to_string(), username.to_string());
            Ok(LoginResponse {
                token: TOKEN.to_string(),
                username: username.to_string(),
            })
        } else {
            Err(rejected(401, "Invalid username or password"))
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.enter(Call::Logout {
            token: token.to_string(),
        })
        .await?;
        self.sessions.borrow_mut().remove(token);
        Ok(())
    }

    async fn check_auth(&self, token: &str) -> Result<AuthCheck, ApiError> {
        self.enter(Call::CheckAuth {
            token: token.to_string(),
        })
        .await?;
        let username = self.sessions.borrow().get(token).cloned();
        Ok(AuthCheck {
            authenticated: username.is_some(),
            username,
        })
    }

    async fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.enter(Call::Signup {
            token: token.to_string(),
            activity: activity.to_string(),
            email: email.to_string(),
        })
        .await?;
        self.authorize(token)?;
        let mut activities = self.activities.borrow_mut();
        let a = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        if a.has_participant(email) {
            return Err(rejected(400, "Student is already signed up"));
        }
        if a.spots_left() <= 0 {
            return Err(rejected(400, "Activity full"));
        }
        a.participants.push(email.to_string());
        Ok(MessageResponse {
            message: format!("Signed up {email} for {activity}"),
        })
    }

    async fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.enter(Call::Unregister {
            token: token.to_string(),
            activity: activity.to_string(),
            email: email.to_string(),
        })
        .await?;
        self.authorize(token)?;
        let mut activities = self.activities.borrow_mut();
        let a = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        if !a.has_participant(email) {
            return Err(rejected(400, "Student is not signed up for this activity"));
        }
        a.participants.retain(|p| p != email);
        Ok(MessageResponse {
            message: "Removed".to_string(),
        })
    }
}
