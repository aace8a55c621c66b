use super::*;

/// Tests a member holding the realm role.
///
/// Expected: Ok(Principal)
#[test]
fn grants_access_with_realm_role() {
    let verifier = verifier();
    let headers = bearer(&issue_token("user-a", &["club-user"]).unwrap());

    let result = AuthGuard::new(&verifier, &headers).require(&[Permission::ClubUser]);

    assert!(result.is_ok());
}

/// Tests a member holding the role through the backend client.
///
/// Expected: Ok(Principal)
#[test]
fn grants_access_with_client_role() {
    let verifier = verifier();
    let token = TokenFactory::new("user-a")
        .client_role("club-user")
        .build()
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&verifier, &headers).require(&[Permission::ClubUser]);

    assert!(result.is_ok());
}

/// Tests an authenticated caller without the member role.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn denies_access_without_role() {
    let verifier = verifier();
    let headers = bearer(&issue_token("user-a", &["offline_access"]).unwrap());

    let result = AuthGuard::new(&verifier, &headers).require(&[Permission::ClubUser]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}
