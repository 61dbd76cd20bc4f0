use super::*;

fn service(name: &str, description: Option<&str>, active: Option<bool>) -> Service {
    Service {
        id: format!("s-{name}"),
        category_id: None,
        name: name.to_owned(),
        description: description.map(ToOwned::to_owned),
        image_url: None,
        marked_price: Some(3000.0),
        discount_price: Some(2500.0),
        is_active: active,
    }
}

#[test]
fn filter_services_hides_inactive_rows() {
    let services = [
        service("AC Repair", None, Some(true)),
        service("Old Offer", None, Some(false)),
    ];
    let visible = filter_services(&services, "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "AC Repair");
}

#[test]
fn filter_services_matches_name_case_insensitively() {
    let services = [service("Deep Cleaning", None, None)];
    assert_eq!(filter_services(&services, "deep").len(), 1);
    assert_eq!(filter_services(&services, "CLEAN").len(), 1);
    assert!(filter_services(&services, "plumbing").is_empty());
}

#[test]
fn filter_services_matches_description() {
    let services = [service("Wiring Check", Some("Full electrical inspection"), None)];
    assert_eq!(filter_services(&services, "electrical").len(), 1);
}

#[test]
fn filter_services_blank_query_returns_all_listed() {
    let services = [
        service("A", None, None),
        service("B", None, Some(true)),
    ];
    assert_eq!(filter_services(&services, "   ").len(), 2);
}
