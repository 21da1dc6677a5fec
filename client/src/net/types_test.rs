use super::*;

#[test]
fn customer_deserializes_camel_case() {
    let customer: Customer = serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "555-0100",
        "address": "12 St James's Square",
        "city": "London",
        "createdAt": "2024-03-01T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(customer.first_name, "Ada");
    assert_eq!(customer.last_name, "Lovelace");
    assert_eq!(customer.created_at, "2024-03-01T10:00:00Z");
}

#[test]
fn customer_missing_fields_default_to_empty() {
    let customer: Customer = serde_json::from_value(serde_json::json!({ "id": "c-2" })).unwrap();
    assert_eq!(customer.id, "c-2");
    assert_eq!(customer.email, "");
    assert_eq!(customer.created_at, "");
}

#[test]
fn display_name_joins_first_and_last() {
    let customer = Customer { first_name: "Ada".to_owned(), last_name: "Lovelace".to_owned(), ..Customer::default() };
    assert_eq!(customer.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_handles_single_name() {
    let customer = Customer { last_name: " Hopper ".to_owned(), ..Customer::default() };
    assert_eq!(customer.display_name(), "Hopper");
}

#[test]
fn display_name_falls_back_to_email() {
    let customer = Customer { email: "anon@example.com".to_owned(), ..Customer::default() };
    assert_eq!(customer.display_name(), "anon@example.com");
}
