use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::VerifiedClaims;
use crate::extractors::SessionUser;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<VerifiedClaims>,
}

/// `200 {"user": {...}}` for a verified session, `401 {"user": null}`
/// otherwise. The reason a token was rejected is not disclosed.
async fn me(user: Option<SessionUser>) -> HttpResponse {
    match user {
        Some(SessionUser(claims)) => HttpResponse::Ok().json(MeResponse { user: Some(claims) }),
        None => HttpResponse::Unauthorized().json(MeResponse { user: None }),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/me", web::get().to(me));
}
