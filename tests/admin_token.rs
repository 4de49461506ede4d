use chrono::Utc;
use tronics::models::User;
use tronics::services::token;

// Session token flow as the login handler and the authentication
// middleware drive it.

#[test]
fn test_issue_and_verify_session_token() {
    let secret = "integration-secret";
    let claims = token::Claims::session("admin", Utc::now());

    let issued = token::encode(&claims, secret).expect("Failed to issue token");
    let parsed = token::parse(&issued, secret).expect("Failed to verify token");

    assert_eq!(parsed.role, "admin");
    assert!(token::validate_expiration(&parsed).is_ok());

    let user = User::from_claims(&parsed);
    assert!(user.is_admin());
}

#[test]
fn test_token_from_other_issuer_is_rejected() {
    let claims = token::Claims::session("admin", Utc::now());
    let issued = token::encode(&claims, "their-secret").unwrap();

    assert!(token::parse(&issued, "our-secret").is_err());
}

#[test]
fn test_non_admin_role_is_not_admin() {
    let claims = token::Claims::session("viewer", Utc::now());
    let user = User::from_claims(&claims);

    assert!(!user.is_admin());
}
