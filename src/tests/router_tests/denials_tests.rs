use crate::config::Backend;
use crate::data::Owner;
use crate::domain::{DenialStatus, Priority};
use crate::errors::ServerError;
use crate::router::handle;
use crate::store::FALLBACK_OWNER;
use crate::tests::utils::{
    body_bytes, body_string, expect_err, get, location, login, offline_state, post_form,
    post_raw, test_state, DEMO_EMAIL,
};

const NEW_DENIAL: &str = "claim_number=CLM-2024-100&patient_name=Ana+Lopez\
&insurance_company=Cigna&denial_date=2024-02-01&claim_amount=%241%2C200.50\
&denial_reason=Duplicate+claim&priority=urgent";

#[test]
fn status_filter_keeps_only_matching_rows() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let body = body_string(handle(get("/denials?status=pending", Some(&token)), &state).unwrap());
    assert!(body.contains("CLM-2024-001"));
    assert!(body.contains("CLM-2024-004"));
    assert!(!body.contains("CLM-2024-002"));
    assert!(body.contains("Showing 2 of 6 denials"));
}

#[test]
fn search_matches_insurer_case_insensitively() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let body = body_string(handle(get("/denials?q=aetna", Some(&token)), &state).unwrap());
    assert!(body.contains("Michael Chen"));
    assert!(!body.contains("Sarah Johnson"));
}

#[test]
fn unknown_filter_values_are_ignored() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let body = body_string(
        handle(get("/denials?status=bogus&priority=all", Some(&token)), &state).unwrap(),
    );
    assert!(body.contains("Showing 6 of 6 denials"));
}

#[test]
fn create_adds_a_pending_denial_and_redirects() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(post_form("/denials", NEW_DENIAL, Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/denials");

    let denials = state.data.store().list_denials(FALLBACK_OWNER);
    assert_eq!(denials.len(), 7);
    let created = denials
        .iter()
        .find(|d| d.claim_number == "CLM-2024-100")
        .unwrap();
    assert_eq!(created.status, DenialStatus::Pending);
    assert_eq!(created.priority, Priority::Urgent);
    assert_eq!(created.claim_amount.0, 120_050);
}

#[test]
fn create_without_required_fields_is_rejected() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let err = expect_err(handle(
        post_form("/denials", "claim_number=CLM-1&patient_name=X", Some(&token)),
        &state,
    ));
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(state.data.store().list_denials(FALLBACK_OWNER).len(), 6);
}

#[test]
fn oversized_amounts_are_rejected_and_the_dashboard_still_renders() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let form = "claim_number=CLM-9&patient_name=X&insurance_company=Y\
&denial_reason=Z&claim_amount=90000000000000000";
    for _ in 0..2 {
        let err = expect_err(handle(post_form("/denials", form, Some(&token)), &state));
        assert!(matches!(err, ServerError::BadRequest(_)));
    }
    assert_eq!(state.data.store().list_denials(FALLBACK_OWNER).len(), 6);

    let resp = handle(get("/", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("$14K"));
}

#[test]
fn multipart_create_keeps_the_denial_when_upload_is_unavailable() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let boundary = "XyZ";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"claim_number\"\r\n\r\nCLM-9\r\n\
--{b}\r\nContent-Disposition: form-data; name=\"patient_name\"\r\n\r\nLee Park\r\n\
--{b}\r\nContent-Disposition: form-data; name=\"insurance_company\"\r\n\r\nHumana\r\n\
--{b}\r\nContent-Disposition: form-data; name=\"denial_date\"\r\n\r\n2024-03-01\r\n\
--{b}\r\nContent-Disposition: form-data; name=\"claim_amount\"\r\n\r\n99\r\n\
--{b}\r\nContent-Disposition: form-data; name=\"denial_reason\"\r\n\r\nCoding error\r\n\
--{b}\r\nContent-Disposition: form-data; name=\"documents\"; filename=\"eob.pdf\"\r\n\
Content-Type: application/pdf\r\n\r\n%PDF-1.4\r\n\
--{b}--\r\n",
        b = boundary
    );
    let req = post_raw(
        "/denials",
        body.into_bytes(),
        &format!("multipart/form-data; boundary={boundary}"),
        Some(&token),
    );

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(state
        .data
        .store()
        .list_denials(FALLBACK_OWNER)
        .iter()
        .any(|d| d.claim_number == "CLM-9"));
}

#[test]
fn status_and_priority_changes_update_the_record() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(
        post_form("/denials/denial_001/status", "status=resolved", Some(&token)),
        &state,
    )
    .unwrap();
    assert_eq!(location(&resp), "/denials");

    handle(
        post_form("/denials/denial_001/priority", "priority=low", Some(&token)),
        &state,
    )
    .unwrap();

    let denial = state.data.store().get_denial("denial_001").unwrap();
    assert_eq!(denial.status, DenialStatus::Resolved);
    assert_eq!(denial.priority, Priority::Low);
    assert!(denial.updated_at > denial.created_at);
}

#[test]
fn bad_status_value_is_a_bad_request() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let err = expect_err(handle(
        post_form("/denials/denial_001/status", "status=closed", Some(&token)),
        &state,
    ));
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn delete_twice_gives_not_found_the_second_time() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(post_form("/denials/denial_003/delete", "", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(state.data.store().list_denials(FALLBACK_OWNER).len(), 5);

    let err = expect_err(handle(post_form("/denials/denial_003/delete", "", Some(&token)), &state));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn other_users_cannot_touch_demo_records() {
    let state = offline_state();
    let token = login(&state, "someone@else.org");

    let err = expect_err(handle(
        post_form("/denials/denial_001/status", "status=resolved", Some(&token)),
        &state,
    ));
    assert!(matches!(err, ServerError::NotFound));

    let err = expect_err(handle(post_form("/denials/denial_001/delete", "", Some(&token)), &state));
    assert!(matches!(err, ServerError::NotFound));
    assert!(state.data.store().get_denial("denial_001").is_some());
}

#[test]
fn upload_fails_upstream_when_storage_is_offline() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let err = expect_err(handle(
        post_raw(
            "/denials/denial_001/documents?name=eob.pdf",
            b"%PDF-1.4".to_vec(),
            "application/pdf",
            Some(&token),
        ),
        &state,
    ));
    assert!(matches!(err, ServerError::Upstream(_)));
}

#[test]
fn upload_to_unknown_denial_is_not_found() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let err = expect_err(handle(
        post_raw(
            "/denials/denial_999/documents?name=eob.pdf",
            b"%PDF-1.4".to_vec(),
            "application/pdf",
            Some(&token),
        ),
        &state,
    ));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn sqlite_backend_stores_denials_and_serves_uploads() {
    let state = test_state(Backend::Sqlite);
    let token = login(&state, DEMO_EMAIL);

    let body = body_string(handle(get("/denials", Some(&token)), &state).unwrap());
    assert!(body.contains("No denials found"));
    assert!(!body.contains("Showing locally stored data"));

    handle(post_form("/denials", NEW_DENIAL, Some(&token)), &state).unwrap();
    let owner = Owner::User(FALLBACK_OWNER.to_string());
    let loaded = state.data.load_denials(&owner);
    assert!(!loaded.is_fallback());
    assert_eq!(loaded.items.len(), 1);
    let id = loaded.items[0].id.clone();

    // Records from the remote are read-only on the page.
    let body = body_string(handle(get("/denials", Some(&token)), &state).unwrap());
    assert!(body.contains("CLM-2024-100"));
    assert!(!body.contains("/status\""));

    let resp = handle(
        post_raw(
            &format!("/denials/{id}/documents?name=letter.txt"),
            b"appeal draft".to_vec(),
            "text/plain",
            Some(&token),
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let resp = handle(get(&format!("/files/denials/{id}/letter.txt"), None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_bytes(resp), b"appeal draft");
}
