use shared_types::{authorize, AuthorizationState, Session, UserRole};

use crate::common::session_for;

#[test]
fn signed_out_visitor_is_redirected_from_both_areas() {
    let session = Session::anonymous();
    for required in [UserRole::Candidate, UserRole::Recruiter] {
        let state = authorize(Some(&session), &required);
        assert_eq!(state, AuthorizationState::Unauthorized);
        assert!(state.should_redirect());
    }
}

#[test]
fn candidate_cannot_open_recruiter_pages() {
    let candidate = session_for(UserRole::Candidate);
    assert!(authorize(Some(&candidate), &UserRole::Recruiter).should_redirect());
    assert_eq!(
        authorize(Some(&candidate), &UserRole::Candidate),
        AuthorizationState::Authorized
    );
}

#[test]
fn recruiter_sees_recruiter_pages_only() {
    let recruiter = session_for(UserRole::Recruiter);
    assert_eq!(
        authorize(Some(&recruiter), &UserRole::Recruiter),
        AuthorizationState::Authorized
    );
    assert!(authorize(Some(&recruiter), &UserRole::Candidate).should_redirect());
}

#[test]
fn unknown_session_waits_instead_of_redirecting() {
    let state = authorize(None, &UserRole::Recruiter);
    assert_eq!(state, AuthorizationState::Unresolved);
    assert!(!state.should_redirect());
}

#[test]
fn sign_out_flips_an_authorized_page() {
    let mut session = session_for(UserRole::Recruiter);
    assert_eq!(
        authorize(Some(&session), &UserRole::Recruiter),
        AuthorizationState::Authorized
    );

    session = Session::anonymous();
    assert!(authorize(Some(&session), &UserRole::Recruiter).should_redirect());
}

#[test]
fn configured_session_is_gated_like_a_sign_in() {
    let session = server::session::initial_session(&shared_types::SessionConfig {
        role: Some("recruiter".to_string()),
        name: None,
    });
    assert_eq!(
        authorize(Some(&session), &UserRole::Recruiter),
        AuthorizationState::Authorized
    );
}

#[test]
fn capitalized_role_does_not_pass_the_gate() {
    let session: Session = serde_json::from_str(
        r#"{"is_authenticated":true,"user":{"id":"u-9","name":"Casey","role":"Recruiter"}}"#,
    )
    .unwrap();
    let state = authorize(Some(&session), &UserRole::Recruiter);
    assert_eq!(state, AuthorizationState::Unauthorized);
    assert!(state.should_redirect());
}

#[test]
fn capitalized_configured_role_starts_anonymous() {
    let session = server::session::initial_session(&shared_types::SessionConfig {
        role: Some("Recruiter".to_string()),
        name: None,
    });
    assert_eq!(session, Session::anonymous());
}
