use crate::router::handle;
use crate::tests::utils::{body_string, get, location, offline_state, post_form, DEMO_EMAIL};

#[test]
fn pages_redirect_to_login_without_a_session() {
    let state = offline_state();

    for uri in ["/", "/denials", "/appeals/new", "/analytics", "/settings"] {
        let resp = handle(get(uri, None), &state).unwrap();
        assert_eq!(resp.status(), 302, "{uri}");
        assert_eq!(location(&resp), "/login");
    }
}

#[test]
fn unknown_session_token_is_treated_as_signed_out() {
    let state = offline_state();
    let resp = handle(get("/", Some("not-a-real-token")), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn login_page_renders_without_a_session() {
    let state = offline_state();
    let resp = handle(get("/login", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(r#"action="/login""#));
}

#[test]
fn login_sets_cookie_that_opens_the_dashboard() {
    let state = offline_state();

    let resp = handle(post_form("/login", "email=Demo%40DenialDesk.local", None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));
    let token = set_cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .unwrap();

    let resp = handle(get("/", Some(token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(&format!("Welcome, {DEMO_EMAIL}")));
}

#[test]
fn invalid_email_shows_the_form_again() {
    let state = offline_state();
    let resp = handle(post_form("/login", "email=nobody", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Please enter a valid email address."));
}

#[test]
fn logout_revokes_the_session_and_clears_the_cookie() {
    let state = offline_state();
    let token = crate::tests::utils::login(&state, DEMO_EMAIL);

    let resp = handle(post_form("/logout", "", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    let cleared = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cleared.contains("Max-Age=0"));

    let resp = handle(get("/", Some(&token)), &state).unwrap();
    assert_eq!(location(&resp), "/login");
}
