use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

// Every endpoint answers with this envelope: {success, message?, count?, data?}.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<T>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }

    pub(crate) fn success(message: impl Into<String>) -> Self {
        JsonResponse {
            success: true,
            message: Some(message.into()),
            count: None,
            data: None,
        }
    }
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    message: Option<String>,
    count: Option<usize>,
    data: Option<T>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            message: None,
            count: None,
            data: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn set_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    fn respond(self, code: StatusCode, message: &str) -> HttpResponse {
        let message = self.message.or_else(|| {
            if message.trim().is_empty() {
                None
            } else {
                Some(message.to_string())
            }
        });

        HttpResponse::build(code).json(JsonResponse {
            success: true,
            message,
            count: self.count,
            data: self.data,
        })
    }

    pub(crate) fn ok(self, message: &str) -> HttpResponse {
        self.respond(StatusCode::OK, message)
    }

    pub(crate) fn created(self, message: &str) -> HttpResponse {
        self.respond(StatusCode::CREATED, message)
    }

    fn to_error(self, code: StatusCode, message: impl Into<String>, fallback: &str) -> Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };

        let body = JsonResponse::<T> {
            success: false,
            message: Some(message.clone()),
            count: None,
            data: None,
        };
        InternalError::from_response(message, HttpResponse::build(code).json(body)).into()
    }

    pub(crate) fn bad_request(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, message, "Bad request")
    }

    pub(crate) fn form_error(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, message, "Validation error")
    }

    pub(crate) fn unauthorized(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::UNAUTHORIZED, message, "Not logged in")
    }

    pub(crate) fn forbidden(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::FORBIDDEN, message, "Not authorized")
    }

    pub(crate) fn not_found(self, message: impl Into<String>) -> Error {
        self.to_error(StatusCode::NOT_FOUND, message, "Object not found")
    }

    pub(crate) fn internal_server_error(self, message: impl Into<String>) -> Error {
        self.to_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "Internal server error",
        )
    }
}
