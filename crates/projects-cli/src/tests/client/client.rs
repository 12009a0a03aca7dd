use crate::{Client, DeleteConfirmation};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3000/");
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3000");
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_delete_confirmation_round_trips_as_json() {
    let confirmation: DeleteConfirmation =
        serde_json::from_str(r#"{"message":"Project deleted successfully"}"#).unwrap();

    // The CLI re-serializes the confirmation when printing it
    let value = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(value["message"], "Project deleted successfully");
}
