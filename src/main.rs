use rusty_hoops::AppState;
use rusty_hoops::args;
use rusty_hoops::controller::cache::{CacheStore, ScheduleCache};
use rusty_hoops::controller::fetcher::BasketballReferenceClient;
use rusty_hoops::controller::http_handlers::{configure, cors};

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = args::args_checks();

    // cold start: whatever a previous run left behind is stale
    let store = CacheStore::new(&args.cache_dir);
    store.truncate_all().await?;

    let fetcher = BasketballReferenceClient::new(
        args.upstream_url.clone(),
        Duration::from_secs(args.timeout_secs),
    )?;
    let state = Data::new(AppState::new(
        ScheduleCache::new(store),
        Box::new(fetcher),
        args.timezone,
    ));

    info!(
        bind = %args.bind,
        port = args.port,
        cache_dir = %args.cache_dir.display(),
        upstream = %args.upstream_url,
        origins = ?args.allowed_origins,
        "starting schedule api"
    );

    let origins = args.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&origins))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
