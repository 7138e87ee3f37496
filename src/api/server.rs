use super::handlers;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        log::info!("starting HTTP server");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .route("/", web::get().to(handlers::index))
                .route("/static/app.js", web::get().to(handlers::app_js))
                .route("/health", web::get().to(handlers::health))
                .service(web::scope("/api").route("/play", web::post().to(handlers::play)))
        })
        .workers(4)
        .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080")))?
        .run()
        .await
    }
}
