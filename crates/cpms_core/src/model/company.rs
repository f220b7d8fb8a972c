//! Company profile domain model.
//!
//! # Responsibility
//! - Define the canonical company record persisted by the store.
//! - Define the unified line-item shape shared by every item list.
//!
//! # Invariants
//! - `id` is store-assigned and immutable after first persist.
//! - `created_at`/`updated_at` are store-assigned RFC 3339 strings.
//! - `action_link` is meaningful only alongside a non-empty `action`; an
//!   action without a link is tolerated and renders inert.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique record identifier in string form.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Seeded records carry short non-UUID ids, so this stays a plain string.
pub type CompanyId = String;

/// Generates a fresh opaque id for records, sections and items.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Company headcount bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl Default for CompanySize {
    fn default() -> Self {
        Self::Small
    }
}

/// Call-to-action attached to a line item.
///
/// Serialized with the exact labels the durable layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "Contact Us")]
    ContactUs,
    Apply,
    Purchase,
}

/// Unified item shape for every ordered item list on a company record.
///
/// Portfolio, financial-statement, assessment, investor, transformation and
/// dynamic-section entries all share this one structure; render and edit
/// logic gets a single code path instead of six near-identical shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable id, unique within the containing list.
    pub id: String,
    pub title: String,
    /// HTML-bearing body text; stored opaque, never interpreted.
    #[serde(default)]
    pub content: String,
    /// Attachment reference (URL or embedded data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// The durable layout stores "no action" as either an absent field or
    /// an empty string; both deserialize to `None`.
    #[serde(
        default,
        deserialize_with = "action_from_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub action: Option<ActionType>,
    /// Meaningful only when `action` is set; tolerated either way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
}

const ACTION_WIRE_VALUES: &[&str] = &["", "Contact Us", "Apply", "Purchase"];

/// Reads an item action from the durable layout.
///
/// Editing forms initialize cleared actions as `""` rather than omitting
/// the field, so the empty string must stay loadable as `None`.
fn action_from_wire<'de, D>(deserializer: D) -> Result<Option<ActionType>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some("Contact Us") => Ok(Some(ActionType::ContactUs)),
        Some("Apply") => Ok(Some(ActionType::Apply)),
        Some("Purchase") => Ok(Some(ActionType::Purchase)),
        Some(other) => Err(de::Error::unknown_variant(other, ACTION_WIRE_VALUES)),
    }
}

impl LineItem {
    /// Creates an empty item with a generated stable id.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            ..Self::default()
        }
    }
}

/// User-defined section: a titled, ordered list of line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Section {
    /// Stable id, unique within `dynamic_sections`.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Section {
    /// Creates an empty section with a generated stable id.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            title: String::new(),
            items: Vec::new(),
        }
    }
}

/// Canonical company profile record.
///
/// Insertion order inside the store is display order and carries no other
/// semantics. Optional list fields default to empty on deserialization so
/// seeded records may omit them entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Absent until first persisted; assigned and frozen by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    pub name: String,
    pub category: String,
    pub size: CompanySize,
    pub location: String,
    /// HTML-bearing description; stored opaque, never sanitized here.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub company_values: Vec<String>,
    /// Logo URL or embedded data; opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub portfolio: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub financial_statement: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessment: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub investors: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformation_plan: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_sections: Vec<Section>,
    /// RFC 3339, set once at creation and never changed afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339, refreshed by the store on every successful update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
