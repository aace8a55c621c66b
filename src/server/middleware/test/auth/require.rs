use super::*;

mod require_club_user;

/// Tests that an empty permission list only requires a valid token.
///
/// Expected: Ok(Principal) for a token without roles
#[test]
fn empty_permission_list_requires_token_only() {
    let verifier = verifier();
    let headers = bearer(&issue_token("user-a", &[]).unwrap());

    let principal = AuthGuard::new(&verifier, &headers).require(&[]).unwrap();

    assert_eq!(principal.subject, "user-a");
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let verifier = verifier();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&verifier, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests Authorization headers that do not carry a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_non_bearer_schemes() {
    let verifier = verifier();

    for value in ["Basic dXNlcjpwYXNz", "Bearer", "Bearer   ", "token"] {
        let headers = headers_with(value);
        let result = AuthGuard::new(&verifier, &headers).require(&[]);

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))),
            "header {:?} should be rejected",
            value
        );
    }
}

/// Tests a bearer token that fails verification.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_invalid_token() {
    let verifier = verifier();
    let token = TokenFactory::new("user-a")
        .secret("wrong-secret")
        .build()
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&verifier, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests that every listed permission must be satisfied.
///
/// Expected: Err(AuthError::AccessDenied) when only one of two roles is held
#[test]
fn requires_all_permissions() {
    let verifier = verifier();
    let headers = bearer(&issue_token("user-a", &["club-user"]).unwrap());

    let result = AuthGuard::new(&verifier, &headers)
        .require(&[Permission::ClubUser, Permission::ClubAdmin]);

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(subject, reason))) => {
            assert_eq!(subject, "user-a");
            assert!(reason.contains("club-admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }
}
