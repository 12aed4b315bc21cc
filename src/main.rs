use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use mongodb::Client;
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

use bloom_server::chat::Persistence;
use bloom_server::completion::{CompletionApi, CompletionClient};
use bloom_server::config::Config;
use bloom_server::database::{Database, MongoDatabase};
use bloom_server::error::Error;
use bloom_server::routes;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("connecting to db: {}", config.mongodb_uri);
    let db = Client::with_uri_str(&config.mongodb_uri)
        .await?
        .database(&config.mongodb_database);
    let db = MongoDatabase::new(db);

    let completion = CompletionClient::new(
        config.completion_url,
        config.completion_token,
        config.completion_model,
        config.completion_timeout,
    )?;

    info!("listening on {}", config.bind_address);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header();

        App::new()
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .app_data(Data::new(
                Box::new(completion.clone()) as Box<dyn CompletionApi>
            ))
            .app_data(Data::new(Persistence::BestEffort))
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(routes::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await?;

    Ok(())
}
