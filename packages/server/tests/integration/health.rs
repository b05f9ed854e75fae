use crate::common::{TestApp, routes};

#[tokio::test]
async fn health_check_reports_ok() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HEALTH).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "OK");
}

#[tokio::test]
async fn health_check_is_idempotent() {
    let app = TestApp::spawn().await;

    let first = app.get(routes::HEALTH).await;
    let second = app.get(routes::HEALTH).await;

    assert_eq!(first.status, 200);
    assert_eq!(second.status, 200);
    assert_eq!(first.text, second.text);
}

#[tokio::test]
async fn responses_allow_cross_origin_requests() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .get(format!("http://{}{}", app.addr, routes::HEALTH))
        .header("Origin", "https://portfolio.example.com")
        .send()
        .await
        .expect("Failed to send request");

    let allow_origin = res
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    assert_eq!(allow_origin.as_deref(), Some("*"));
}
