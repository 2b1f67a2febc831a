mod web;

use std::io;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use tetrapress::config::Config;
use tetrapress::content::BlogLibrary;

use crate::web::middleware::ClientHints;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let library = match &config.blog_data_path {
        Some(path) => BlogLibrary::from_path(path),
        None => BlogLibrary::builtin(),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    log::info!("Loaded {} articles", library.len());

    let state = Data::new(web::AppState::new(&config, library));
    let static_dir = config.static_dir.clone();

    log::info!("Listening on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(ClientHints)
            .wrap(Logger::default())
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .configure(web::handlers::configure_catch_all)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
