//! Transient status banner.
//!
//! Each [`show`](StatusBanner::show) hands back a [`BannerTicket`]; the dismissal
//! timer started for that message later calls [`expire`](StatusBanner::expire)
//! with it. Showing a new message invalidates all older tickets, so a timer that
//! belongs to a replaced message can never hide the current one.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    /// CSS class used by the page stylesheet.
    pub fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "message success",
            BannerKind::Error => "message error",
        }
    }
}

/// Identifies one shown message for its dismissal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Default)]
struct Slot {
    current: Option<Banner>,
    generation: u64,
}

/// Shared banner state. Clones observe the same banner.
#[derive(Clone, Default)]
pub struct StatusBanner {
    slot: Rc<RefCell<Slot>>,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Banner> {
        self.slot.borrow().current.clone()
    }

    /// Replace whatever is shown with `banner`.
    pub fn show(&self, banner: Banner) -> BannerTicket {
        let mut slot = self.slot.borrow_mut();
        slot.generation += 1;
        slot.current = Some(banner);
        BannerTicket(slot.generation)
    }

    /// Hide the banner if `ticket` still belongs to the visible message.
    pub fn expire(&self, ticket: BannerTicket) -> bool {
        let mut slot = self.slot.borrow_mut();
        if slot.generation != ticket.0 || slot.current.is_none() {
            return false;
        }
        slot.current = None;
        true
    }
}
