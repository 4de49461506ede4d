use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// Fixed lifetime of an admin session token. No renewal.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token format: expected 3 parts (header.payload.signature)")]
    Format,
    #[error("token signature mismatch")]
    Signature,
    #[error("can't decode token payload: {0}")]
    Payload(String),
    #[error("token expired (exp: {exp}, now: {now})")]
    Expired { exp: i64, now: i64 },
    #[error("can't sign token: {0}")]
    Sign(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub role: String,
    pub exp: i64,
}

impl Claims {
    pub fn session(role: &str, now: DateTime<Utc>) -> Self {
        Claims {
            role: role.to_string(),
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
        }
    }
}

fn keyed_mac(secret: &str) -> Result<Hmac<Sha256>, TokenError> {
    Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|err| TokenError::Sign(err.to_string()))
}

/// Issue an HS256-signed token carrying `claims`.
pub fn encode(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::to_string(claims).map_err(|err| TokenError::Sign(err.to_string()))?;
    let payload = URL_SAFE_NO_PAD.encode(payload);

    let signing_input = format!("{}.{}", header, payload);
    let mut mac = keyed_mac(secret)?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", signing_input, signature))
}

/// Verify the signature and decode the claims. Expiration is checked
/// separately with [`validate_expiration`].
pub fn parse(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Format);
    }

    let signature = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|_| TokenError::Signature)?;

    let mut mac = keyed_mac(secret)?;
    mac.update(format!("{}.{}", parts[0], parts[1]).as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::Signature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|err| TokenError::Payload(err.to_string()))?;

    serde_json::from_slice(&payload).map_err(|err| TokenError::Payload(err.to_string()))
}

pub fn validate_expiration(claims: &Claims) -> Result<(), TokenError> {
    let now = Utc::now().timestamp();
    if claims.exp < now {
        return Err(TokenError::Expired {
            exp: claims.exp,
            now,
        });
    }
    Ok(())
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, String> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Invalid Authorization header format".to_string());
    }
    if parts[0] != "Bearer" {
        return Err("Expected Bearer scheme in Authorization header".to_string());
    }
    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_encode_parse_roundtrip() {
        let claims = Claims::session("admin", Utc::now());
        let token = encode(&claims, SECRET).expect("Failed to encode token");

        let parsed = parse(&token, SECRET).expect("Failed to parse valid token");
        assert_eq!(parsed.role, "admin");
        assert_eq!(parsed.exp, claims.exp);
        assert!(validate_expiration(&parsed).is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_secret() {
        let claims = Claims::session("admin", Utc::now());
        let token = encode(&claims, SECRET).unwrap();

        assert!(matches!(
            parse(&token, "other-secret"),
            Err(TokenError::Signature)
        ));
    }

    #[test]
    fn test_parse_rejects_tampered_payload() {
        let claims = Claims::session("admin", Utc::now());
        let token = encode(&claims, SECRET).unwrap();

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let forged = Claims {
            role: "superadmin".to_string(),
            exp: claims.exp,
        };
        parts[1] = URL_SAFE_NO_PAD.encode(serde_json::to_string(&forged).unwrap());
        let tampered = parts.join(".");

        assert!(matches!(
            parse(&tampered, SECRET),
            Err(TokenError::Signature)
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse("not-a-token", SECRET), Err(TokenError::Format)));
        assert!(parse("a.b.c", SECRET).is_err());
    }

    #[test]
    fn test_validate_expired_claims() {
        let claims = Claims {
            role: "admin".to_string(),
            exp: Utc::now().timestamp() - 3600,
        };

        assert!(matches!(
            validate_expiration(&claims),
            Err(TokenError::Expired { .. })
        ));
    }

    #[test]
    fn test_session_claims_lifetime() {
        let now = Utc::now();
        let claims = Claims::session("admin", now);
        assert_eq!(
            claims.exp,
            (now + Duration::hours(SESSION_TTL_HOURS)).timestamp()
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.xyz.abc";
        let token = extract_bearer_token(auth_header).expect("Failed to extract token");
        assert_eq!(token, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.xyz.abc");

        assert!(extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(extract_bearer_token("Bearer").is_err());
    }
}
