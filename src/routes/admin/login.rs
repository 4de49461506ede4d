use crate::configuration::Settings;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::token;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;

#[tracing::instrument(name = "Admin login.", skip_all)]
#[post("/admin-login")]
pub async fn login_handler(
    form: web::Json<forms::admin::Login>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(_errors) = form.validate() {
        return Err(JsonResponse::<()>::build().bad_request("Email and password are required"));
    }

    if form.email != settings.admin.email || form.password != settings.admin.password {
        // 404 on purpose: don't acknowledge which half was wrong
        return Err(JsonResponse::<()>::build().not_found("Invalid admin credentials"));
    }

    let claims = token::Claims::session("admin", Utc::now());
    let session_token = token::encode(&claims, &settings.admin.jwt_secret).map_err(|err| {
        tracing::error!("Failed to sign session token: {}", err);
        JsonResponse::<()>::build().internal_server_error("")
    })?;

    let cookie = Cookie::build("token", session_token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(token::SESSION_TTL_HOURS))
        .finish();

    tracing::info!("Admin logged in");
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(JsonResponse::<()>::success("Admin logged in")))
}
