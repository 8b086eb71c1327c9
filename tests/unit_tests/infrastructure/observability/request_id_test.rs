use support_chat::infrastructure::observability::RequestId;

#[test]
fn given_request_id_when_created_then_exposes_value() {
    let request_id = RequestId("test-123".to_string());
    assert_eq!(request_id.as_str(), "test-123");
    assert_eq!(request_id.clone(), request_id);
}
