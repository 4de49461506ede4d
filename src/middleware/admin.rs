use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// Rejects requests whose session does not carry the admin role. Wraps
/// the back-office scopes; the authentication manager has already run.
pub struct AdminGuard {}

impl AdminGuard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for AdminGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGuardMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminGuardMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let role = {
            let extensions = req.extensions();
            extensions
                .get::<Arc<models::User>>()
                .map(|user| user.role.clone())
        };

        match role.as_deref() {
            Some("admin") => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await })
            }
            Some(_) => Box::pin(ready(Err(
                JsonResponse::<()>::build().forbidden("Not authorized")
            ))),
            None => Box::pin(ready(Err(
                JsonResponse::<()>::build().unauthorized("Not logged in")
            ))),
        }
    }
}
