use crate::helpers::JsonResponse;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{post, HttpResponse, Responder, Result};

#[tracing::instrument(name = "Admin logout.")]
#[post("/admin-logout")]
pub async fn logout_handler() -> Result<impl Responder> {
    // Overwrite the session cookie with an immediately expiring one
    let cookie = Cookie::build("token", "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(JsonResponse::<()>::success("Logged out successfully")))
}
