use bookgen_core::{BookRecord, Cover, Review};
use schemars::schema_for;

fn sample_record() -> BookRecord {
    BookRecord {
        id: 1,
        isbn: "978-0-3064-0615-7".to_string(),
        title: "The Quiet River".to_string(),
        authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
        publisher: "Acme Press".to_string(),
        publish_year: 1987,
        genre: "Mystery".to_string(),
        language: "English".to_string(),
        pages: 321,
        likes: 4,
        price: "12.40".to_string(),
        reviews: vec![Review {
            reviewer: "Grace Hopper".to_string(),
            text: "Compelling.".to_string(),
            rating: 5,
            date: "2023-05-02".to_string(),
        }],
        cover: Cover {
            bg_color: "#f1c40f".to_string(),
            fg_color: "#f39c12".to_string(),
            accent_color: "#e67e22".to_string(),
            layout_type: 2,
        },
        summary: "First paragraph.\n\nSecond paragraph.".to_string(),
    }
}

#[test]
fn serializes_record_with_client_keys() {
    let json = serde_json::to_value(sample_record()).expect("serialize record");

    assert_eq!(json["publishYear"], 1987);
    assert_eq!(json["price"], "12.40");
    assert_eq!(json["cover"]["bgColor"], "#f1c40f");
    assert_eq!(json["cover"]["accentColor"], "#e67e22");
    assert_eq!(json["cover"]["type"], 2);
    assert_eq!(json["reviews"][0]["rating"], 5);
    assert!(json.get("publish_year").is_none());
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record();
    let encoded = serde_json::to_string(&record).expect("serialize record");
    let decoded: BookRecord = serde_json::from_str(&encoded).expect("parse record");
    assert_eq!(decoded, record);
}

#[test]
fn cover_contrast_follows_background() {
    let record = sample_record();
    assert_eq!(record.cover.text_color(), "#000000");
    assert_eq!(record.cover.accent_text_color(), "#000000");
    assert_eq!(record.author_line(), "Ada Lovelace, Alan Turing");
    assert_eq!(record.review_count(), 1);
}

#[test]
fn json_schema_lists_record_fields() {
    let schema = schema_for!(BookRecord);
    let json = serde_json::to_value(&schema).expect("serialize schema");
    let properties = json["properties"].as_object().expect("properties");
    for key in ["id", "isbn", "publishYear", "reviews", "cover", "summary"] {
        assert!(properties.contains_key(key), "missing {key}");
    }
}
