mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use crate::config::Args;
use crate::services::{app_config, assets};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let url = args.url();
    let client_config = web::Data::new(args.client_config());

    info!(
        "API base {} | {} cards per page | splash {} ms",
        client_config.api_base_url, client_config.items_per_page, client_config.splash_ms
    );

    if args.open_browser {
        let target = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&target) {
                warn!("could not open browser at {target}: {e}");
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(client_config.clone())
            .route(app_config::PATH, web::get().to(app_config::process))
            .default_service(web::route().to(assets::serve_embedded))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}
