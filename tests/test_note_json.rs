use anyhow::Result;
use jotter::domain::Note;
use jotter::util::testing::sample_note;

#[ctor::ctor]
fn init() {
    jotter::util::testing::init_test_setup().expect("Failed to initialize test setup");
}

#[test]
fn given_note_when_serializing_then_uses_backend_field_names() -> Result<()> {
    // Arrange
    let note = sample_note(7, "Groceries", "milk");

    // Act
    let json = serde_json::to_string(&note)?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;

    // Assert: wire names are id/title/note/createdAt
    assert_eq!(parsed["id"].as_i64(), Some(7));
    assert_eq!(parsed["title"].as_str(), Some("Groceries"));
    assert_eq!(parsed["note"].as_str(), Some("milk"));
    assert!(parsed["createdAt"].is_string());
    assert!(parsed.get("body").is_none());
    Ok(())
}

#[test]
fn given_backend_payload_when_deserializing_then_maps_into_note() -> Result<()> {
    // Arrange: shape as the backend emits it
    let payload = r#"{
        "id": 3,
        "title": "",
        "note": "free-form text",
        "createdAt": "2024-05-01T12:30:00Z"
    }"#;

    // Act
    let note: Note = serde_json::from_str(payload)?;

    // Assert
    assert_eq!(note.id, 3);
    assert_eq!(note.title, "");
    assert_eq!(note.display_title(), "(Empty title)");
    assert_eq!(note.body, "free-form text");
    assert_eq!(note.created_at.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    Ok(())
}

#[test]
fn given_note_when_round_tripping_then_values_survive() -> Result<()> {
    // Arrange
    let note = sample_note(1, "A", "body text");

    // Act
    let json = serde_json::to_string(&note)?;
    let back: Note = serde_json::from_str(&json)?;

    // Assert
    assert_eq!(back, note);
    Ok(())
}
