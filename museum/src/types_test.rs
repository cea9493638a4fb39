use super::*;

#[test]
fn artwork_parses_camel_case_record() {
    let raw = r#"{
        "objectID": 436535,
        "isHighlight": true,
        "primaryImage": "https://images.example/full.jpg",
        "primaryImageSmall": "https://images.example/small.jpg",
        "department": "European Paintings",
        "title": "Wheat Field with Cypresses",
        "artistDisplayName": "Vincent van Gogh"
    }"#;
    let art: ArtworkMetadata = serde_json::from_str(raw).unwrap();
    assert_eq!(art.object_id, 436_535);
    assert_eq!(art.title, "Wheat Field with Cypresses");
    assert_eq!(art.artist_display_name, "Vincent van Gogh");
    assert_eq!(art.department, "European Paintings");
    assert_eq!(art.primary_image, "https://images.example/full.jpg");
    assert!(art.has_thumbnail());
}

#[test]
fn artwork_nulls_and_missing_fields_read_as_empty() {
    let art: ArtworkMetadata = serde_json::from_str(r#"{"objectID": 1, "title": null}"#).unwrap();
    assert_eq!(art.title, "");
    assert_eq!(art.primary_image_small, "");
    assert!(!art.has_thumbnail());
}

#[test]
fn blank_thumbnail_is_not_usable() {
    let art = ArtworkMetadata { primary_image_small: "   ".into(), ..Default::default() };
    assert!(!art.has_thumbnail());
}

#[test]
fn artwork_serializes_with_api_field_names() {
    let art = ArtworkMetadata { object_id: 7, title: "T".into(), ..Default::default() };
    let v = serde_json::to_value(&art).unwrap();
    assert_eq!(v["objectID"], 7);
    assert_eq!(v["primaryImageSmall"], "");
    assert_eq!(v["artistDisplayName"], "");
}

#[test]
fn object_ids_parse_and_null_list() {
    let ids: ObjectIds = serde_json::from_str(r#"{"total": 3, "objectIDs": [1, 2, 3]}"#).unwrap();
    assert_eq!(ids.object_ids, vec![1, 2, 3]);
    let empty: ObjectIds = serde_json::from_str(r#"{"total": 0, "objectIDs": null}"#).unwrap();
    assert!(empty.object_ids.is_empty());
}

#[test]
fn retryable_statuses() {
    assert!(MuseumError::ApiRequest("reset".into()).retryable());
    assert!(MuseumError::ApiResponse { status: 503, body: String::new() }.retryable());
    assert!(!MuseumError::ApiResponse { status: 404, body: String::new() }.retryable());
    assert!(!MuseumError::ApiParse("bad".into()).retryable());
}
