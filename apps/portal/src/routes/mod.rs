use actix_web::web;

pub mod health;
pub mod me;
pub mod pages;

/// Register every portal route. Guarding and logging middleware are
/// applied by the caller around the whole app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(me::configure_routes)
        .configure(pages::configure_routes);
}
