use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these with additional middleware (CORS);
/// for tests we register the same paths without those wrappers so that
/// endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check route: /health
    cfg.configure(health::configure_routes);

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
