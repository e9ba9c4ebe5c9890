//! Model (de)serialization tests, including the lenient price policy.

use salesdash::{Statistics, Transaction};

fn seed_record(price: serde_json::Value) -> String {
    serde_json::json!({
        "id": 1,
        "title": "Wireless Phone Charger",
        "price": price,
        "description": "Fast charging pad",
        "category": "electronics",
        "image": "https://img.example/1.jpg",
        "sold": true,
        "dateOfSale": "2021-11-27T20:29:54+05:30"
    })
    .to_string()
}

#[test]
fn deserializes_the_seed_wire_shape() {
    let t: Transaction = serde_json::from_str(&seed_record(serde_json::json!(329.85))).unwrap();
    assert_eq!(t.id, 1);
    assert_eq!(t.price, 329.85);
    assert_eq!(t.date_of_sale, "2021-11-27T20:29:54+05:30");
    assert_eq!(t.image.as_deref(), Some("https://img.example/1.jpg"));
    assert!(t.sold);
}

#[test]
fn numeric_string_price_is_parsed() {
    let t: Transaction = serde_json::from_str(&seed_record(serde_json::json!("329.85"))).unwrap();
    assert_eq!(t.price, 329.85);
}

#[test]
fn unparseable_price_becomes_zero_not_an_error() {
    for junk in [
        serde_json::json!("not a number"),
        serde_json::json!(null),
        serde_json::json!([1, 2]),
    ] {
        let t: Transaction = serde_json::from_str(&seed_record(junk.clone())).unwrap();
        assert_eq!(t.price, 0.0, "{junk}");
    }
}

#[test]
fn serializes_back_to_camel_case() {
    let t: Transaction = serde_json::from_str(&seed_record(serde_json::json!(10.0))).unwrap();
    let value = serde_json::to_value(&t).unwrap();
    assert!(value.get("dateOfSale").is_some());
    assert!(value.get("date_of_sale").is_none());
}

#[test]
fn statistics_use_the_wire_field_names() {
    let stats = Statistics {
        total_amount_of_sale: 600.0,
        total_sold_items: 3,
        total_not_sold_items: 2,
    };
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["totalAmountOfSale"], serde_json::json!(600.0));
    assert_eq!(value["totalSoldItems"], serde_json::json!(3));
    assert_eq!(value["totalNotSoldItems"], serde_json::json!(2));
}
