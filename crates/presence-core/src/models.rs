use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a user in the presence log.
pub type UserId = u32;

/// One user's recorded start/end pair for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Time the user arrived.
    pub start: NaiveTime,
    /// Time the user left.
    pub end: NaiveTime,
}

/// All dates recorded for one user, in ascending date order.
pub type DayRecords = BTreeMap<NaiveDate, DayRecord>;

/// Parsed contents of the presence log, grouped by user id.
///
/// Built fresh from the source file on every cache miss and handed out as an
/// immutable snapshot; duplicate dates for the same user overwrite earlier
/// entries (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceLog {
    users: BTreeMap<UserId, DayRecords>,
}

impl PresenceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` for `(user_id, date)`, replacing any existing entry.
    pub fn insert(&mut self, user_id: UserId, date: NaiveDate, record: DayRecord) {
        self.users.entry(user_id).or_default().insert(date, record);
    }

    /// All dates recorded for `user_id`, or `None` for an unknown user.
    pub fn user(&self, user_id: UserId) -> Option<&DayRecords> {
        self.users.get(&user_id)
    }

    /// User ids present in the log, ascending.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    /// Number of users in the log.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// `true` when the log holds no users at all.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
