use std::env;
use std::sync::Arc;

use message_board::routes::configure_routes;
use message_board::store::{MessageStore, PostgresStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // A missing or malformed connection string is logged, not fatal: the
    // server still comes up and the message routes answer with the failure
    // envelope until the database is reachable
    let config = match env::var("DB_CONNECTION_STRING") {
        Ok(conn) => match StoreConfig::from_connection_string(&conn) {
            Ok(config) => config,
            Err(err) => {
                log::error!("invalid DB_CONNECTION_STRING: {}", err);
                StoreConfig::default()
            }
        },
        Err(_) => {
            log::error!("DB_CONNECTION_STRING is not set, falling back to defaults");
            StoreConfig::default()
        }
    };

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3030);

    let store = PostgresStore::new(config)?;

    // Probe connectivity in the background, like the original's
    // connect-then-log: the outcome is reported but never crashes the server
    let probe = store.clone();
    tokio::spawn(async move {
        match probe.probe().await {
            Ok(()) => log::info!("connected to the message database"),
            Err(err) => log::error!("failed to connect to the message database: {}", err),
        }
    });

    let store: Arc<dyn MessageStore> = Arc::new(store);
    let routes = configure_routes(store);

    log::info!("starting server on http://0.0.0.0:{}", port);
    warp::serve(routes).run(([0, 0, 0, 0], port)).await;

    Ok(())
}
