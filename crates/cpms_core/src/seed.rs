//! Fixed option catalogs and the built-in seed dataset.
//!
//! # Responsibility
//! - Expose the canonical category/size/location/action option lists.
//! - Provide the example records used when durable storage is empty at
//!   first load.

use crate::model::company::{ActionType, CompanyProfile, CompanySize, LineItem};

/// Category options offered by record forms and list filters.
pub const COMPANY_CATEGORIES: &[&str] = &[
    "Technology",
    "Finance",
    "Healthcare",
    "Manufacturing",
    "Retail",
    "Education",
    "Energy",
    "Transportation",
    "Telecommunications",
    "Media",
    "Real Estate",
    "Food & Beverage",
    "Other",
];

/// Location options offered by record forms and list filters.
pub const LOCATIONS: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Japan",
    "China",
    "India",
    "Brazil",
    "Spain",
    "Italy",
    "Netherlands",
    "Sweden",
    "Singapore",
    "Other",
];

/// All selectable line-item actions; `None` renders as "None".
pub const ACTION_TYPES: &[Option<ActionType>] = &[
    None,
    Some(ActionType::ContactUs),
    Some(ActionType::Apply),
    Some(ActionType::Purchase),
];

/// Returns the built-in example records.
///
/// Used only when the companies slot is absent at first load; ids here are
/// short fixed strings, not generated uuids.
pub fn seed_companies() -> Vec<CompanyProfile> {
    vec![
        CompanyProfile {
            id: Some("1".to_string()),
            name: "TechInnovate Solutions".to_string(),
            category: "Technology".to_string(),
            size: CompanySize::Medium,
            location: "United States".to_string(),
            description: "<p>TechInnovate Solutions is a leading provider of innovative software solutions for businesses of all sizes.</p>".to_string(),
            website: Some("https://techinnovate.example.com".to_string()),
            revenue: Some("$10M - $50M".to_string()),
            founded_date: Some("2015-05-12".to_string()),
            headquarters: Some("San Francisco, CA".to_string()),
            mission: Some("<p>Our mission is to help businesses transform through innovative technology solutions.</p>".to_string()),
            company_values: vec![
                "Innovation".to_string(),
                "Integrity".to_string(),
                "Excellence".to_string(),
                "Customer Focus".to_string(),
            ],
            portfolio: vec![LineItem {
                id: "p1".to_string(),
                title: "AI-Powered Analytics Platform".to_string(),
                content: "<p>An advanced analytics platform using artificial intelligence to provide actionable insights.</p>".to_string(),
                action: Some(ActionType::ContactUs),
                action_link: Some("https://techinnovate.example.com/contact".to_string()),
                ..LineItem::default()
            }],
            created_at: Some("2023-01-01T12:00:00Z".to_string()),
            updated_at: Some("2023-06-15T09:30:00Z".to_string()),
            ..CompanyProfile::default()
        },
        CompanyProfile {
            id: Some("2".to_string()),
            name: "FinanceWise Global".to_string(),
            category: "Finance".to_string(),
            size: CompanySize::Large,
            location: "United Kingdom".to_string(),
            description: "<p>FinanceWise Global provides comprehensive financial services to clients worldwide.</p>".to_string(),
            website: Some("https://financewise.example.com".to_string()),
            revenue: Some("$100M - $500M".to_string()),
            founded_date: Some("2008-11-03".to_string()),
            headquarters: Some("London, UK".to_string()),
            created_at: Some("2023-01-15T10:00:00Z".to_string()),
            updated_at: Some("2023-05-20T14:45:00Z".to_string()),
            ..CompanyProfile::default()
        },
        CompanyProfile {
            id: Some("3".to_string()),
            name: "HealthPlus Medical".to_string(),
            category: "Healthcare".to_string(),
            size: CompanySize::Large,
            location: "Canada".to_string(),
            description: "<p>HealthPlus Medical is dedicated to providing innovative healthcare solutions.</p>".to_string(),
            website: Some("https://healthplus.example.com".to_string()),
            created_at: Some("2023-02-05T08:15:00Z".to_string()),
            updated_at: Some("2023-07-10T11:20:00Z".to_string()),
            ..CompanyProfile::default()
        },
    ]
}
