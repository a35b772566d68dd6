//! Route guard middleware
//!
//! Runs on every request. Reads the `token` cookie, verifies it, and either
//! forwards the request or answers with a `307` redirect. On a forwarded
//! request with a valid token the `VerifiedClaims` are stored in request
//! extensions, so pages read the identity the guard already checked.
//! Cookies are never written here.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::codec;
use crate::cookies::{CookieReader, PRIMARY_COOKIE};
use crate::error::AppError;
use crate::guard::{decide, GuardDecision, SessionState};
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct RouteGuard;

impl<S, B> Transform<S, ServiceRequest> for RouteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardMiddleware { service }))
    }
}

pub struct RouteGuardMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RouteGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available to route guard").into())
                });
            }
        };

        let path = req.path().to_string();
        let class = app_state.routes.classify(&path);

        // Only the primary cookie gates navigation.
        let token = codec::decode(CookieReader::cookie(&req, PRIMARY_COOKIE).as_deref());
        let state = SessionState::resolve(token.as_deref(), &app_state.security);

        if let SessionState::AuthenticatedInvalid(err) = &state {
            security::session_rejected(err.reason(), &path);
        }

        match decide(class, &state) {
            GuardDecision::Allow => {
                if let SessionState::AuthenticatedValid(claims) = state {
                    req.extensions_mut().insert(claims);
                }
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            GuardDecision::Redirect(target) => {
                debug!(
                    path = %path,
                    session = state.label(),
                    redirect_to = target,
                    "route guard redirect"
                );
                let response = HttpResponse::TemporaryRedirect()
                    .insert_header((header::LOCATION, target))
                    .finish()
                    .map_into_right_body::<B>();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}
