use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};

use crate::auth::codec;
use crate::auth::jwt::verify_session_token;
use crate::auth::VerifiedClaims;
use crate::cookies::{CookieReader, PRIMARY_COOKIE};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Verified identity of the signed-in user.
///
/// Taken from request extensions when the route guard already verified
/// the token; otherwise (routes the guard excludes, such as `/api/*`) the
/// `token` cookie is read and verified here with the same secret.
#[derive(Debug, Clone)]
pub struct SessionUser(pub VerifiedClaims);

impl SessionUser {
    pub fn claims(&self) -> &VerifiedClaims {
        &self.0
    }
}

fn resolve(req: &HttpRequest) -> Result<SessionUser, AppError> {
    if let Some(claims) = req.extensions().get::<VerifiedClaims>() {
        return Ok(SessionUser(claims.clone()));
    }

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let token = codec::decode(CookieReader::cookie(req, PRIMARY_COOKIE).as_deref())
        .ok_or_else(AppError::unauthorized_missing_token)?;

    let claims = verify_session_token(&token, &app_state.security)?;
    Ok(SessionUser(claims))
}

impl FromRequest for SessionUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}
