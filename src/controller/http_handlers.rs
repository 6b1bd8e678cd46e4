use crate::controller::schedule::AppState;
use crate::controller::time::{game_to_local_time, to_iso8601};
use crate::error::AppError;
use crate::model::Category;
use actix_cors::Cors;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub const DESCRIPTION: &str = "An api serving today's NBA schedule data.";
pub const SAMPLE_GAME_DATE: &str = "Fri, Mar 1, 2024";
pub const SAMPLE_GAME_TIME: &str = "7:00p";

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!([DESCRIPTION]))
}

/// Games starting within the next day.
pub async fn future_games(state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = state.games(Category::Future).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// Games that started within the last day, with scores where posted.
pub async fn past_games(state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = state.games(Category::Past).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// Debug helper: a fixed Eastern tip-off rendered in the display zone.
pub async fn time(state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let converted = game_to_local_time(SAMPLE_GAME_DATE, SAMPLE_GAME_TIME, &state.zone)?
        .ok_or_else(|| AppError::Parse("sample game has no start time".into()))?;
    Ok(HttpResponse::Ok().json(to_iso8601(&converted)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/future_games", web::get().to(future_games))
        .route("/past_games", web::get().to(past_games))
        .route("/time", web::get().to(time))
        .route("/health", web::get().to(HttpResponse::Ok));
}

#[must_use]
pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
