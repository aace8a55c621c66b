use super::*;
use crate::server::error::auth::AuthError;

// Public RSA components only need to be valid base64url for key construction.
const RSA_MODULUS: &str = "sXchDaQebHnPiGvyDOAT4saGEUetSyo9MKLOoWFsueri23bOdgWp4Dy1WlUzewbgBHod5pcM9H95GQRV3JDXboIRROSBigeC5yjU1hGzHHyXss8UDprecbAYxknTcQkhslANGRUZmdTOQ5qTRsLAt6BTYuyvVRdhS8exSZEy_c4gs_7svlJJQ4H9_NxsiIoLwAEk7-Q3UXERGYw_75IDrGA84-lA_-Ct4eTlXHBIY2EaV7t7LjJaynVJCpkv4LKjTTAumiGUIuQhrNhZLuF_RJLqHpM2kgWFLU7-VTdL1VbC2tejvcI2BlMkEpk1BzBZI0KQB0GaDWFLN-aEAw3vRw";

fn jwks(keys: serde_json::Value) -> JwkSet {
    serde_json::from_value(serde_json::json!({ "keys": keys })).unwrap()
}

/// Tests that signature keys are loaded and encryption keys skipped.
///
/// Expected: Ok(TokenVerifier) holding only the signing key
#[test]
fn loads_signing_keys_only() {
    let set = jwks(serde_json::json!([
        { "kty": "RSA", "kid": "sig-1", "use": "sig", "alg": "RS256", "n": RSA_MODULUS, "e": "AQAB" },
        { "kty": "RSA", "kid": "enc-1", "use": "enc", "alg": "RSA-OAEP", "n": RSA_MODULUS, "e": "AQAB" }
    ]));

    let verifier = TokenVerifier::from_jwks(&set, "test-jwks", TEST_CLIENT_ID).unwrap();

    assert_eq!(verifier.key_count(), 1);
}

/// Tests that a key set without signing keys is refused.
///
/// Expected: Err(ConfigError::NoSigningKeys)
#[test]
fn refuses_key_set_without_signing_keys() {
    let set = jwks(serde_json::json!([
        { "kty": "RSA", "kid": "enc-1", "use": "enc", "alg": "RSA-OAEP", "n": RSA_MODULUS, "e": "AQAB" }
    ]));

    let result = TokenVerifier::from_jwks(&set, "test-jwks", TEST_CLIENT_ID);

    assert!(matches!(result, Err(ConfigError::NoSigningKeys(_))));
}

/// Tests that tokens signed with an algorithm no key supports are rejected.
///
/// Expected: Err(AuthError::UnknownSigningKey)
#[test]
fn rejects_token_for_unknown_key() {
    let set = jwks(serde_json::json!([
        { "kty": "RSA", "kid": "sig-1", "use": "sig", "alg": "RS256", "n": RSA_MODULUS, "e": "AQAB" }
    ]));
    let verifier = TokenVerifier::from_jwks(&set, "test-jwks", TEST_CLIENT_ID).unwrap();

    let token = TokenFactory::new("user-a").build().unwrap();

    assert!(matches!(
        verifier.verify(&token),
        Err(AuthError::UnknownSigningKey(_))
    ));
}
