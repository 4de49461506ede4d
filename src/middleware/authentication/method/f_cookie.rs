use crate::configuration::Settings;
use crate::middleware::authentication::get_header;
use crate::models;
use crate::services::token;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

#[tracing::instrument(name = "Authenticate with cookie", skip_all)]
pub async fn try_cookie(req: &mut ServiceRequest) -> Result<bool, String> {
    let cookie_header = get_header::<String>(req, "cookie")?;
    if cookie_header.is_none() {
        return Ok(false);
    }

    // Parse cookies to find the session token
    let cookies = cookie_header.unwrap();
    let token = cookies.split(';').find_map(|cookie| {
        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
        if parts.len() == 2 && parts[0] == "token" {
            Some(parts[1].to_string())
        } else {
            None
        }
    });

    if token.is_none() {
        return Ok(false);
    }

    tracing::debug!("Found session token in cookies");

    let settings = req.app_data::<web::Data<Settings>>().unwrap();
    let claims = token::parse(&token.unwrap(), &settings.admin.jwt_secret)
        .map_err(|_| "Invalid token".to_string())?;
    token::validate_expiration(&claims).map_err(|err| {
        tracing::warn!("Session token rejected: {}", err);
        "Invalid token".to_string()
    })?;

    let user = models::User::from_claims(&claims);
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}
