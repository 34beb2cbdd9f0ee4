//! Optional user directory for the Presence Analyzer.
//!
//! Maps user ids to display names and avatar URLs supplied by an external
//! directory service. The mapping is decorative: user listings fall back to
//! a generated label for any id without a profile, and a missing or broken
//! directory file degrades to an empty directory instead of failing startup.

use std::collections::HashMap;
use std::path::Path;

use presence_core::models::UserId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One user's directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Human-readable display name.
    pub name: String,
    /// Absolute URL of the user's avatar image, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Mapping from user id to [`UserProfile`], loaded from a JSON sidecar file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    profiles: HashMap<UserId, UserProfile>,
}

impl UserDirectory {
    /// An empty directory – every lookup falls back to a generated label.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the directory from a JSON file of `{user_id: {name, avatar}}`.
    ///
    /// Returns an empty directory (with a warning) when the file is absent,
    /// unreadable or not valid JSON; directory data never blocks startup.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("User directory {} not loaded: {}", path.display(), e);
                return Self::empty();
            }
        };

        match serde_json::from_str::<HashMap<UserId, UserProfile>>(&content) {
            Ok(profiles) => {
                debug!("Loaded {} user profiles from {}", profiles.len(), path.display());
                Self { profiles }
            }
            Err(e) => {
                warn!("User directory {} is malformed: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    /// The profile for `user_id`, if the directory has one.
    pub fn get(&self, user_id: UserId) -> Option<&UserProfile> {
        self.profiles.get(&user_id)
    }

    /// Display name for `user_id`: the directory name, or `"User {id}"`.
    pub fn display_name(&self, user_id: UserId) -> String {
        match self.profiles.get(&user_id) {
            Some(profile) => profile.name.clone(),
            None => format!("User {}", user_id),
        }
    }

    /// Avatar URL for `user_id`, when the directory knows one.
    pub fn avatar_url(&self, user_id: UserId) -> Option<&str> {
        self.profiles.get(&user_id)?.avatar.as_deref()
    }

    /// Number of profiles in the directory.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// `true` when no profiles were loaded.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
