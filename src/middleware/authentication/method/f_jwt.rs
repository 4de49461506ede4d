use crate::configuration::Settings;
use crate::middleware::authentication::get_header;
use crate::models;
use crate::services::token;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

#[tracing::instrument(name = "Authenticate with bearer token", skip_all)]
pub async fn try_jwt(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = get_header::<String>(req, "authorization")?;
    if authorization.is_none() {
        return Ok(false);
    }

    let authorization = authorization.unwrap();
    let bearer = match token::extract_bearer_token(&authorization) {
        Ok(token) => token,
        Err(_) => {
            return Ok(false); // not a Bearer token, try other auth methods
        }
    };

    let settings = req.app_data::<web::Data<Settings>>().unwrap();
    let claims = match token::parse(bearer, &settings.admin.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("Token parsing failed: {}", err);
            return Ok(false);
        }
    };

    if let Err(err) = token::validate_expiration(&claims) {
        tracing::warn!("Token validation failed: {}", err);
        return Err("Invalid token".to_string());
    }

    let user = models::User::from_claims(&claims);
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    tracing::info!("Bearer authentication successful for role: {}", claims.role);
    Ok(true)
}
