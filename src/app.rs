//! app.rs
use std::path::Path;

use actix_files::Files;
use actix_web::web;

use crate::handlers::{
    customer_handler, image_handler, message_handler, schedule_handler, session_handler,
    settings_handler,
};

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/sessions")
            .route("", web::post().to(session_handler::create_session_endpoint))
            .service(
                web::scope("/{id}")
                    .route("", web::get().to(session_handler::session_summary_endpoint))
                    .route(
                        "",
                        web::delete().to(session_handler::delete_session_endpoint),
                    )
                    .route(
                        "/customers",
                        web::post().to(customer_handler::upload_customers_endpoint),
                    )
                    .route(
                        "/customers",
                        web::get().to(customer_handler::list_customers_endpoint),
                    )
                    .route(
                        "/image",
                        web::post().to(image_handler::upload_image_endpoint),
                    )
                    .route(
                        "/messages",
                        web::post().to(message_handler::generate_messages_endpoint),
                    )
                    .route(
                        "/messages",
                        web::get().to(message_handler::preview_messages_endpoint),
                    )
                    .route(
                        "/settings",
                        web::put().to(settings_handler::update_settings_endpoint),
                    )
                    .route(
                        "/settings",
                        web::get().to(settings_handler::get_settings_endpoint),
                    )
                    .route(
                        "/schedule",
                        web::post().to(schedule_handler::schedule_endpoint),
                    )
                    .route("/log", web::get().to(schedule_handler::log_endpoint)),
            ),
    );
}

/// Dashboard estático (index.html, css, js). Va después de /api.
pub fn init_static(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    cfg.service(Files::new("/", public_dir).index_file("index.html"));
}
