use crate::Arbitrary;
use crate::dto::ErrorResponse;
use crate::dto::PlayRequest;
use crate::dto::PlayResponse;
use crate::game::Move;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");

/// Play one round. Malformed bodies collapse to an empty request, so a
/// bad payload and a missing move are rejected identically.
pub async fn play(body: web::Bytes) -> impl Responder {
    let req = serde_json::from_slice::<PlayRequest>(&body).unwrap_or_default();
    match Move::try_from(req.r#move.as_deref().unwrap_or_default()) {
        Err(_) => HttpResponse::BadRequest().json(ErrorResponse::invalid_move()),
        Ok(player) => {
            let computer = Move::random();
            log::debug!("play {} vs {}", player, computer);
            HttpResponse::Ok().json(PlayResponse::from((player, computer)))
        }
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn app_js() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}
