use crate::config::Backend;
use crate::data::Owner;
use crate::domain::{AppealStatus, AppealType};
use crate::errors::ServerError;
use crate::router::handle;
use crate::store::FALLBACK_OWNER;
use crate::tests::utils::{
    body_string, expect_err, get, location, login, offline_state, post_form, test_state,
    DEMO_EMAIL,
};

#[test]
fn appeals_list_shows_linked_claims() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let resp = handle(get("/appeals", Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("CLM-2024-002"));
    assert!(body.contains("Michael Chen"));
    assert!(body.contains("Dr. Davis"));
    // Both seed deadlines are long past.
    assert!(body.contains("OVERDUE"));
}

#[test]
fn appeals_filter_by_status_and_claim_search() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let body = body_string(
        handle(get("/appeals?status=under-review", Some(&token)), &state).unwrap(),
    );
    assert!(body.contains("Dr. Davis"));
    assert!(!body.contains("Dr. Johnson"));

    let body = body_string(handle(get("/appeals?q=clm-2024-002", Some(&token)), &state).unwrap());
    assert!(body.contains("Dr. Johnson"));
    assert!(!body.contains("Dr. Davis"));

    let body = body_string(
        handle(get("/appeals?type=peer-to-peer", Some(&token)), &state).unwrap(),
    );
    assert!(body.contains("No appeals found"));
}

#[test]
fn appeal_with_missing_denial_shows_placeholder() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    handle(post_form("/denials/denial_002/delete", "", Some(&token)), &state).unwrap();
    let body = body_string(handle(get("/appeals", Some(&token)), &state).unwrap());
    assert!(body.contains("Denial not found"));
}

#[test]
fn new_appeal_form_preselects_the_denial() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let body = body_string(
        handle(get("/appeals/new?denial_id=denial_004", Some(&token)), &state).unwrap(),
    );
    assert!(body.contains(r#"<option value="denial_004" selected>"#));
    assert!(body.contains("CLM-2024-004 - Robert Wilson"));
}

#[test]
fn create_appeal_starts_as_draft() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let form = "denial_id=denial_001&appeal_type=second-level&submitted_by=Dr.+Smith\
&appeal_reason=Authorization+was+requested+in+time&deadline_date=2099-01-01";
    let resp = handle(post_form("/appeals", form, Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/appeals");

    let appeals = state.data.store().list_appeals(FALLBACK_OWNER);
    assert_eq!(appeals.len(), 3);
    let created = appeals.iter().find(|a| a.denial_id == "denial_001").unwrap();
    assert_eq!(created.status, AppealStatus::Draft);
    assert_eq!(created.appeal_type, AppealType::SecondLevel);
    assert_eq!(created.appeal_date, chrono::Utc::now().date_naive());
}

#[test]
fn remote_appeals_render_without_row_actions() {
    let state = test_state(Backend::Sqlite);
    let token = login(&state, DEMO_EMAIL);

    let denial = "claim_number=CLM-2024-300&patient_name=Ana+Lopez&insurance_company=Cigna\
&denial_date=2024-02-01&claim_amount=900&denial_reason=Duplicate+claim";
    handle(post_form("/denials", denial, Some(&token)), &state).unwrap();
    let owner = Owner::User(FALLBACK_OWNER.to_string());
    let denial_id = state.data.load_denials(&owner).items[0].id.clone();

    let form = format!(
        "denial_id={denial_id}&appeal_type=first-level&submitted_by=Dr.+Gray\
&appeal_reason=Not+a+duplicate"
    );
    handle(post_form("/appeals", &form, Some(&token)), &state).unwrap();

    let board = state.data.load_appeal_board(&owner);
    assert!(!board.is_fallback());
    assert_eq!(board.items.appeals.len(), 1);
    assert!(board.items.denials.contains_key(&denial_id));

    let body = body_string(handle(get("/appeals", Some(&token)), &state).unwrap());
    assert!(body.contains("CLM-2024-300"));
    assert!(body.contains("Dr. Gray"));
    assert!(!body.contains("Showing locally stored data"));
    assert!(!body.contains("/delete\""));
    assert!(!body.contains("/status\""));
}

#[test]
fn appeal_status_change_and_delete() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    handle(
        post_form("/appeals/appeal_001/status", "status=approved", Some(&token)),
        &state,
    )
    .unwrap();
    assert_eq!(
        state.data.store().get_appeal("appeal_001").unwrap().status,
        AppealStatus::Approved
    );

    let resp = handle(post_form("/appeals/appeal_001/delete", "", Some(&token)), &state).unwrap();
    assert_eq!(location(&resp), "/appeals");
    let err = expect_err(handle(
        post_form("/appeals/appeal_001/status", "status=denied", Some(&token)),
        &state,
    ));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn letter_template_is_filled_from_the_denial() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let uri = "/appeals/letter?denial_id=denial_001&appeal_date=2024-02-01\
&appeal_reason=Auth+was+pending&submitted_by=Dr.+Smith";
    let resp = handle(get(uri, Some(&token)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let text = body_string(resp);
    assert!(text.contains("Re: Appeal for Claim #CLM-2024-001"));
    assert!(text.contains("Patient: Sarah Johnson"));
    assert!(text.contains("Auth was pending"));
    assert!(text.contains("$2,450.00"));
    assert!(text.contains("Dr. Smith"));
}

#[test]
fn letter_needs_a_known_denial() {
    let state = offline_state();
    let token = login(&state, DEMO_EMAIL);

    let err = expect_err(handle(get("/appeals/letter", Some(&token)), &state));
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = expect_err(handle(get("/appeals/letter?denial_id=denial_999", Some(&token)), &state));
    assert!(matches!(err, ServerError::NotFound));
}
