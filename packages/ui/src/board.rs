//! # View synchronizer
//!
//! [`Board`] wires the session store, roster cache, action gateway and banner
//! together and is what the components talk to. Every operation mutates one of
//! the shared containers and then the caller re-renders by asking for a fresh
//! [`BoardView`] via [`Board::view`]. There is no incremental patching.
//!
//! ## Operations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`init`](Board::init) | Validate the persisted token, then load the roster. |
//! | [`login`](Board::login) | Log in; outcome shown inline in the login overlay. |
//! | [`finish_login`](Board::finish_login) | Close the overlay and reload the roster (runs after [`login_close_delay`](Board::login_close_delay)). |
//! | [`logout`](Board::logout) | Log out, close the overlay, reload the roster. |
//! | [`signup`](Board::signup) / [`unregister`](Board::unregister) | Go through the gateway, show the outcome in the banner. |
//! | [`expire_banner`](Board::expire_banner) | Dismissal timer callback. |
//!
//! Timers are not run here: operations that show a banner return an
//! [`ActionReport`] whose ticket the caller hands back after
//! [`banner_lifetime`](Board::banner_lifetime).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::BoardApi;
use store::{BoardConfig, TokenStore};

use crate::banner::{Banner, BannerTicket, StatusBanner};
use crate::error::ActionError;
use crate::gateway::{ActionGateway, PendingAction};
use crate::roster::RosterCache;
use crate::session::SessionStore;
use crate::view::{project, BoardView, LoginPrompt};

const LOGIN_SUCCESS: &str = "Login successful!";

/// Result of a banner-reporting action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub ticket: BannerTicket,
    pub result: Result<String, ActionError>,
}

impl ActionReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Client state for one page. Clones share all state.
pub struct Board<A, T> {
    api: Rc<A>,
    session: SessionStore<T>,
    roster: RosterCache,
    banner: StatusBanner,
    login: Rc<RefCell<LoginPrompt>>,
    banner_lifetime: Duration,
    login_close_delay: Duration,
}

impl<A, T: Clone> Clone for Board<A, T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            roster: self.roster.clone(),
            banner: self.banner.clone(),
            login: self.login.clone(),
            banner_lifetime: self.banner_lifetime,
            login_close_delay: self.login_close_delay,
        }
    }
}

impl<A: BoardApi, T: TokenStore> Board<A, T> {
    pub fn new(api: A, tokens: T, config: &BoardConfig) -> Self {
        Self {
            api: Rc::new(api),
            session: SessionStore::new(tokens),
            roster: RosterCache::new(),
            banner: StatusBanner::new(),
            login: Rc::new(RefCell::new(LoginPrompt::default())),
            banner_lifetime: config.banner_lifetime(),
            login_close_delay: config.login_close_delay(),
        }
    }

    pub fn session(&self) -> &SessionStore<T> {
        &self.session
    }

    pub fn roster(&self) -> &RosterCache {
        &self.roster
    }

    pub fn banner_lifetime(&self) -> Duration {
        self.banner_lifetime
    }

    pub fn login_close_delay(&self) -> Duration {
        self.login_close_delay
    }

    /// Current projection of all state.
    pub fn view(&self) -> BoardView {
        project(
            &self.session.current(),
            &self.roster.state(),
            self.banner.current(),
            &self.login.borrow(),
        )
    }

    /// Page load: restore the session, then fetch the roster.
    pub async fn init(&self) {
        self.session.restore(self.api.as_ref()).await;
        self.roster.refresh(self.api.as_ref()).await;
    }

    pub async fn refresh(&self) -> bool {
        self.roster.refresh(self.api.as_ref()).await
    }

    pub fn open_login(&self) {
        self.login.borrow_mut().open = true;
    }

    pub fn close_login(&self) {
        let mut login = self.login.borrow_mut();
        login.open = false;
        login.message = None;
    }

    pub fn set_login_username(&self, username: &str) {
        self.login.borrow_mut().username = username.to_string();
    }

    pub fn set_login_password(&self, password: &str) {
        self.login.borrow_mut().password = password.to_string();
    }

    /// Attempt a login from the overlay form. The outcome is written to the
    /// overlay's inline message; on success the caller schedules
    /// [`finish_login`](Self::finish_login).
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ActionError> {
        let result = self
            .session
            .login(self.api.as_ref(), username, password)
            .await;
        let mut login = self.login.borrow_mut();
        login.message = Some(match &result {
            Ok(_) => Banner::success(LOGIN_SUCCESS),
            Err(e) => Banner::error(e.to_string()),
        });
        if result.is_ok() {
            login.username.clear();
            login.password.clear();
        }
        drop(login);
        result
    }

    /// Second half of a successful login.
    pub async fn finish_login(&self) {
        self.close_login();
        self.refresh().await;
    }

    pub async fn logout(&self) {
        self.session.logout(self.api.as_ref()).await;
        self.close_login();
        self.refresh().await;
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ActionReport {
        self.run(PendingAction::signup(activity, email)).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> ActionReport {
        self.run(PendingAction::unregister(activity, email)).await
    }

    async fn run(&self, action: PendingAction) -> ActionReport {
        // Same synchronous read the gateway makes before its request.
        let dispatched_with = self.session.token();
        let gateway = ActionGateway::new(self.api.as_ref(), &self.session, &self.roster);
        let result = gateway.dispatch(action).await;

        if let (Err(ActionError::SessionInvalid(_)), Some(token)) = (&result, &dispatched_with) {
            self.session.invalidate(token).await;
        }

        let ticket = self.banner.show(match &result {
            Ok(message) => Banner::success(message.clone()),
            Err(e) => Banner::error(e.to_string()),
        });
        ActionReport { ticket, result }
    }

    /// Dismissal timer callback. Returns whether anything changed.
    pub fn expire_banner(&self, ticket: BannerTicket) -> bool {
        self.banner.expire(ticket)
    }
}
