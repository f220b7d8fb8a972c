use cpms_core::{
    CompanyFilter, CompanyProfile, CompanyService, CompanySize, CompanyStore, MemoryStorage,
    ServiceError, StoreError, User, COMPANIES_SLOT,
};

fn admin() -> User {
    User {
        id: "1".to_string(),
        email: "admin@cpms.com".to_string(),
        name: Some("Admin User".to_string()),
        role: "admin".to_string(),
    }
}

fn sample_company(name: &str, category: &str, location: &str) -> CompanyProfile {
    CompanyProfile {
        name: name.to_string(),
        category: category.to_string(),
        size: CompanySize::Small,
        location: location.to_string(),
        description: format!("<p>{name} description</p>"),
        ..CompanyProfile::default()
    }
}

fn service_with(companies: &[CompanyProfile]) -> CompanyService<MemoryStorage> {
    let backend = MemoryStorage::with_slot(COMPANIES_SLOT, b"[]".to_vec());
    let mut store = CompanyStore::new(backend);
    store.load().unwrap();
    let mut service = CompanyService::new(store);
    let user = admin();
    for company in companies {
        service.create(&user, company.clone()).unwrap();
    }
    service
}

#[test]
fn crud_operations_flow_through_the_store() {
    let mut service = service_with(&[]);
    let user = admin();

    let id = service
        .create(&user, sample_company("Acme", "Technology", "United States"))
        .unwrap();
    assert_eq!(service.get(&user, &id).unwrap().name, "Acme");

    let mut fields = service.get(&user, &id).unwrap().clone();
    fields.name = "Acme Renamed".to_string();
    service.update(&user, &id, fields).unwrap();
    assert_eq!(service.get(&user, &id).unwrap().name, "Acme Renamed");

    service.delete(&user, &id).unwrap();
    let err = service.get(&user, &id).unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::NotFound(_))));
}

#[test]
fn list_without_filter_returns_display_order() {
    let service = service_with(&[
        sample_company("Acme", "Technology", "United States"),
        sample_company("Globex", "Finance", "Germany"),
    ]);

    let listed = service.list(&admin(), &CompanyFilter::default()).unwrap();
    let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Acme", "Globex"]);
}

#[test]
fn search_matches_name_or_description_case_insensitively() {
    let mut healthcare = sample_company("CarePlus", "Healthcare", "Canada");
    healthcare.description = "<p>Clinics and TELEMEDICINE services</p>".to_string();
    let service = service_with(&[
        sample_company("Acme", "Technology", "United States"),
        healthcare,
    ]);
    let user = admin();

    let by_name = service
        .list(
            &user,
            &CompanyFilter {
                search: Some("acme".to_string()),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Acme");

    let by_description = service
        .list(
            &user,
            &CompanyFilter {
                search: Some("telemedicine".to_string()),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "CarePlus");
}

#[test]
fn category_location_and_size_filters_are_exact_and_compose() {
    let mut large = sample_company("Globex", "Finance", "Germany");
    large.size = CompanySize::Large;
    let service = service_with(&[
        sample_company("Acme", "Technology", "United States"),
        sample_company("Initech", "Technology", "Germany"),
        large,
    ]);
    let user = admin();

    let tech = service
        .list(
            &user,
            &CompanyFilter {
                category: Some("Technology".to_string()),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert_eq!(tech.len(), 2);

    let german_tech = service
        .list(
            &user,
            &CompanyFilter {
                category: Some("Technology".to_string()),
                location: Some("Germany".to_string()),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert_eq!(german_tech.len(), 1);
    assert_eq!(german_tech[0].name, "Initech");

    let large_only = service
        .list(
            &user,
            &CompanyFilter {
                size: Some(CompanySize::Large),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert_eq!(large_only.len(), 1);
    assert_eq!(large_only[0].name, "Globex");
}

#[test]
fn empty_search_term_matches_everything() {
    let service = service_with(&[sample_company("Acme", "Technology", "United States")]);

    let listed = service
        .list(
            &admin(),
            &CompanyFilter {
                search: Some(String::new()),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[test]
fn no_match_yields_an_empty_list_not_an_error() {
    let service = service_with(&[sample_company("Acme", "Technology", "United States")]);

    let listed = service
        .list(
            &admin(),
            &CompanyFilter {
                search: Some("zzz-no-such-company".to_string()),
                ..CompanyFilter::default()
            },
        )
        .unwrap();
    assert!(listed.is_empty());
}

#[test]
fn summary_counts_totals_categories_and_locations() {
    let service = service_with(&[
        sample_company("Acme", "Technology", "United States"),
        sample_company("Initech", "Technology", "Germany"),
        sample_company("Globex", "Finance", "Germany"),
        sample_company("CarePlus", "Healthcare", "Canada"),
    ]);

    let summary = service.summarize(&admin()).unwrap();
    assert_eq!(summary.total_companies, 4);
    assert_eq!(
        summary.category_counts,
        [
            ("Technology".to_string(), 2),
            ("Finance".to_string(), 1),
            ("Healthcare".to_string(), 1),
        ]
    );
    assert_eq!(
        summary.location_counts,
        [
            ("Germany".to_string(), 2),
            ("United States".to_string(), 1),
            ("Canada".to_string(), 1),
        ]
    );
    // Distinct counts fall out of the aggregated vectors.
    assert_eq!(summary.category_counts.len(), 3);
    assert_eq!(summary.location_counts.len(), 3);
}

#[test]
fn summary_skips_empty_category_and_location_values() {
    let mut blank = sample_company("Shelf Co", "", "");
    blank.description = "<p>Placeholder record</p>".to_string();
    let service = service_with(&[
        sample_company("Acme", "Technology", "United States"),
        blank,
    ]);

    let summary = service.summarize(&admin()).unwrap();
    assert_eq!(summary.total_companies, 2);
    assert_eq!(summary.category_counts, [("Technology".to_string(), 1)]);
    assert_eq!(summary.location_counts, [("United States".to_string(), 1)]);
}

#[test]
fn summary_breaks_count_ties_by_first_seen_order() {
    let service = service_with(&[
        sample_company("Globex", "Finance", "Germany"),
        sample_company("Acme", "Technology", "United States"),
        sample_company("Initech", "Technology", "Germany"),
        sample_company("CarePlus", "Healthcare", "Canada"),
    ]);

    let summary = service.summarize(&admin()).unwrap();
    let categories: Vec<_> = summary
        .category_counts
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();
    // Technology leads on count; Finance and Healthcare tie at one each
    // and keep the order they were first seen in.
    assert_eq!(
        categories,
        [("Technology", 2), ("Finance", 1), ("Healthcare", 1)]
    );
}

#[test]
fn recent_returns_the_head_of_the_collection() {
    let service = service_with(&[
        sample_company("Acme", "Technology", "United States"),
        sample_company("Globex", "Finance", "Germany"),
        sample_company("Initech", "Technology", "Germany"),
    ]);
    let user = admin();

    let recent = service.recent(&user, 2).unwrap();
    let names: Vec<_> = recent.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Acme", "Globex"]);

    // A limit past the end just returns everything.
    assert_eq!(service.recent(&user, 10).unwrap().len(), 3);
}
