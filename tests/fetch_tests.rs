use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wpforms_sync::fetch::FormsClient;

fn client_for(server: &MockServer) -> FormsClient {
    FormsClient::new(
        format!("{}/wp-json/custom/v1/form-submissions/", server.uri()),
        "admin".to_string(),
        "secret".to_string(),
        5,
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_returns_submission_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/custom/v1/form-submissions/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "form_submissions": [
                {"id": 1, "Razón Social": "Acme"},
                {"id": 2, "Razón Social": "Globex"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let submissions = client_for(&mock_server).fetch_submissions(4).await.unwrap();

    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0]["Razón Social"], "Acme");
}

#[tokio::test]
async fn test_fetch_sends_basic_auth() {
    let mock_server = MockServer::start().await;

    // base64("admin:secret")
    Mock::given(method("GET"))
        .and(path("/wp-json/custom/v1/form-submissions/4"))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "form_submissions": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submissions = client_for(&mock_server).fetch_submissions(4).await.unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn test_fetch_missing_key_is_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/custom/v1/form-submissions/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let submissions = client_for(&mock_server).fetch_submissions(4).await.unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn test_fetch_non_success_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/custom/v1/form-submissions/4"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_submissions(4).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("403"), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_fetch_invalid_json_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/custom/v1/form-submissions/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_submissions(4).await;
    assert!(result.is_err());
}
