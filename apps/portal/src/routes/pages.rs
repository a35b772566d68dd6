//! Server-rendered portal pages.
//!
//! Bodies are minimal placeholders; what matters here is which identity a
//! page sees and where it sends the user. Role dashboards check the
//! verified role themselves: the route guard only checks that a session
//! is present and valid.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::{Claims, Role};
use crate::error::AppError;
use crate::extractors::SessionUser;
use crate::guard::UNAUTHORIZED_PATH;
use crate::logging::security;

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<!doctype html><html><head><title>{title}</title></head><body>{body}</body></html>"
        ))
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn display_name(claims: &Claims) -> String {
    let name = claims
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&claims.email);
    escape_html(name)
}

async fn home(user: SessionUser) -> HttpResponse {
    page(
        "Hospital Portal",
        &format!("<h1>Welcome, {}</h1>", display_name(user.claims())),
    )
}

async fn login() -> HttpResponse {
    page("Sign in", "<h1>Sign in</h1>")
}

async fn register() -> HttpResponse {
    page("Register", "<h1>Create an account</h1>")
}

async fn unauthorized() -> HttpResponse {
    page(
        "Unauthorized",
        "<h1>Unauthorized</h1><p>You do not have access to that page.</p>",
    )
}

/// Landing dashboard linking to the dashboard for the verified role.
async fn dashboard(user: SessionUser) -> HttpResponse {
    let claims = user.claims();
    let link = match claims.role.as_ref() {
        Some(role) if !matches!(role, Role::Other(_)) => {
            format!("<a href=\"/dashboard/{role}\">Open {role} dashboard</a>")
        }
        _ => format!("<a href=\"{UNAUTHORIZED_PATH}\">No dashboard for your account</a>"),
    };
    page(
        "Dashboard",
        &format!(
            "<h1>Dashboard</h1><p>Signed in as {}</p>{link}",
            display_name(claims)
        ),
    )
}

async fn role_dashboard(
    req: HttpRequest,
    path: web::Path<String>,
    user: SessionUser,
) -> Result<HttpResponse, AppError> {
    let required = Role::parse_known(&path)
        .ok_or_else(|| AppError::not_found(format!("No dashboard for {:?}", path.as_str())))?;

    let claims = user.claims();
    if claims.role.as_ref() != Some(&required) {
        security::role_mismatch(
            &claims.email,
            claims.role.as_ref().map(Role::as_str).unwrap_or("none"),
            required.as_str(),
            req.path(),
        );
        return Ok(redirect(UNAUTHORIZED_PATH));
    }

    Ok(page(
        &format!("{required} dashboard"),
        &format!(
            "<h1>{required} dashboard</h1><p>Signed in as {}</p>",
            display_name(claims)
        ),
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/login", web::get().to(login))
        .route("/register", web::get().to(register))
        .route("/unauthorized", web::get().to(unauthorized))
        .route("/dashboard", web::get().to(dashboard))
        .route("/dashboard/{role}", web::get().to(role_dashboard));
}
