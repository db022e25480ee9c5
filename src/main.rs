use actix_web::{middleware, web, App, HttpServer};
use bookstore_reviews::app::configure;
use bookstore_reviews::config::Config;
use bookstore_reviews::db::Database;
use leptos::logging::log;
use simple_logger::SimpleLogger;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::load();
    SimpleLogger::new()
        .with_level(config.level_filter())
        .init()
        .map_err(io::Error::other)?;

    // Initialize the database
    let db = Database::new(&config.database).map_err(io::Error::other)?;
    db.create_schema().await.map_err(io::Error::other)?; // Ensure the schema is current
    log!("[SERVER] Schema ready in {}", config.database);

    let policy = config.invalid_review_policy;
    log!("[SERVER] Invalid reviews policy: {:?}", policy);
    log!("[SERVER] listening on http://{}", &config.addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(policy))
            .configure(configure)
    })
    .bind(&config.addr)?
    .run()
    .await
}
