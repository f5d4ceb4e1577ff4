use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, expect_err, get, login, offline_state, DEMO_EMAIL};

#[test]
fn dashboard_shows_seed_caseload_for_demo_user() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(get("/", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Total Denials"));
    assert!(body.contains("$14K"));
    assert!(body.contains("Sarah Johnson"));
    assert!(body.contains("Showing locally stored data"));
}

#[test]
fn new_user_sees_an_empty_dashboard() {
    let state = offline_state();
    let token = login(&state, "fresh@clinic.org");

    let body = body_string(handle(get("/", Some(&token)), &state).unwrap());
    assert!(body.contains("No recent denials found"));
    assert!(!body.contains("Sarah Johnson"));
}

#[test]
fn placeholder_sections_say_coming_soon() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    for (uri, blurb) in [
        ("/calendar", "Calendar view for tracking deadlines and appointments."),
        ("/team", "Manage team members and assignments."),
        ("/search", "Advanced search and filtering capabilities."),
        ("/settings", "Application settings and preferences."),
    ] {
        let body = body_string(handle(get(uri, Some(&token)), &state).unwrap());
        assert!(body.contains("Coming soon..."), "{uri}");
        assert!(body.contains(blurb), "{uri}");
    }
}

#[test]
fn stylesheet_is_public() {
    let state = offline_state();
    let resp = handle(get("/static/main.css", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_route_is_not_found() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);
    let err = expect_err(handle(get("/nope", Some(&token)), &state));
    assert!(matches!(err, ServerError::NotFound));
}
