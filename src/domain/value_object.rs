//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Participant identity value object.
///
/// Identities are generated fresh per request; this layer performs no
/// deduplication or collision handling — that is the room service's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Wrap an identity supplied by a caller (e.g. a query parameter).
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a fresh viewer identity (`user-<uuid>`).
    pub fn viewer() -> Self {
        Self(format!("user-{}", Uuid::new_v4()))
    }

    /// Generate a fresh owner identity (`owner-<uuid>`).
    pub fn owner() -> Self {
        Self(format!("owner-{}", Uuid::new_v4()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
