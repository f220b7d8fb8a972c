//! Authenticated user identity and capability checks.

use serde::{Deserialize, Serialize};

/// Operation classes a user may be granted.
///
/// Today every authenticated user holds every capability; the check exists
/// so store-facing callers already have the seam when roles arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Read record and list views.
    ViewCompanies,
    /// Create, update and delete records.
    ManageCompanies,
}

impl Capability {
    /// Stable string id used in logging and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewCompanies => "view_companies",
            Self::ManageCompanies => "manage_companies",
        }
    }
}

/// Identity written to the session slot on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: String,
}

impl User {
    /// Returns whether this user may perform operations of the given class.
    pub fn allows(&self, _capability: Capability) -> bool {
        // Any authenticated user is authorized for all operations.
        true
    }
}
