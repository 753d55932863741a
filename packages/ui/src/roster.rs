//! Roster cache: the last successfully fetched activity list, or an explicit
//! loading/failed state. Always replaced whole, never patched.

use std::cell::RefCell;
use std::rc::Rc;

use api::BoardApi;
use store::Roster;

/// What the activity list currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RosterState {
    /// Nothing fetched yet.
    #[default]
    Loading,
    Ready(Roster),
    /// The last refresh failed; the previous snapshot has been discarded.
    Failed,
}

/// Shared roster container. Clones observe the same state.
#[derive(Clone, Default)]
pub struct RosterCache {
    state: Rc<RefCell<RosterState>>,
}

impl RosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RosterState {
        self.state.borrow().clone()
    }

    /// The current snapshot, if the last refresh succeeded.
    pub fn roster(&self) -> Option<Roster> {
        match &*self.state.borrow() {
            RosterState::Ready(roster) => Some(roster.clone()),
            _ => None,
        }
    }

    /// Re-fetch the full roster. Returns whether the fetch succeeded.
    ///
    /// Overlapping refreshes are not ordered: whichever completes last wins.
    pub async fn refresh<A: BoardApi>(&self, api: &A) -> bool {
        let next = match api.activities().await {
            Ok(roster) => {
                tracing::debug!("Loaded {} activities", roster.len());
                RosterState::Ready(roster)
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                RosterState::Failed
            }
        };
        let ok = matches!(next, RosterState::Ready(_));
        *self.state.borrow_mut() = next;
        ok
    }
}
