use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, login, offline_state, DEMO_EMAIL};

#[test]
fn analytics_page_renders_charts() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(get("/analytics", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Monthly Trends"));
    assert!(body.contains("Top Denial Reasons"));
    assert!(body.contains(r#"href="/analytics/export""#));
}

#[test]
fn export_returns_a_workbook() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(get("/analytics/export", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"denials_"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}
