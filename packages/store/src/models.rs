//! # Domain models for the activity roster
//!
//! Defines the data returned by `GET /activities` once it has been parsed into
//! client-side types. The wire format is a JSON object keyed by activity name:
//!
//! ```json
//! {
//!   "Chess Club": {
//!     "description": "Learn strategies and compete in chess tournaments",
//!     "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!     "max_participants": 12,
//!     "participants": ["michael@mergington.edu"]
//!   }
//! }
//! ```
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Activity`] | One activity card. The map key is folded into `name` so the value is self-describing. |
//! | [`Roster`] | The full collection, kept in the order the server sent it. Used both for rendering cards and for filling the activity selector. |
//!
//! [`Roster`] has hand-written serde impls: a plain `HashMap` would lose the
//! server's ordering, so the map is visited entry by entry into a `Vec`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single extracurricular activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    /// Unique key, e.g. "Chess Club"
    pub name: String,
    pub description: String,
    /// Free-form schedule text: "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    pub max_participants: u32,
    /// Student emails in sign-up order
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. The server is responsible for keeping this
    /// non-negative; the client only displays it.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Value half of one `GET /activities` entry.
#[derive(Serialize, Deserialize)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// Every activity on the board, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    activities: Vec<Activity>,
}

impl Roster {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Look up an activity by its name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Activity names in display order, for the signup selector.
    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(
                &activity.name,
                &ActivityDetails {
                    description: activity.description.clone(),
                    schedule: activity.schedule.clone(),
                    max_participants: activity.max_participants,
                    participants: activity.participants.clone(),
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Roster, M::Error> {
                let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    // Later duplicates replace earlier ones, like any JSON object.
                    activities.retain(|a: &Activity| a.name != name);
                    activities.push(Activity {
                        name,
                        description: details.description,
                        schedule: details.schedule,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    });
                }
                Ok(Roster { activities })
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}
