// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::store::MessageStore;

/// Hand the injected store handle to each handler
fn with_store(
    store: Arc<dyn MessageStore>,
) -> impl Filter<Extract = (Arc<dyn MessageStore>,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

pub fn configure_routes(
    store: Arc<dyn MessageStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /messages
    let list_messages = warp::path("messages")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::list_messages_handler);

    // POST /messages/save
    let save_message = warp::path("messages")
        .and(warp::path("save"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::save_message_handler);

    // GET /messages/{messageId} — the id stays an opaque string so that
    // malformed ids reach the store instead of failing to route
    let get_message = warp::path("messages")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::get_message_handler);

    // GET /about
    let about = warp::path("about")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::about_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    // Combine routes; the save literal is tried before the id capture
    list_messages
        .or(save_message)
        .or(get_message)
        .or(about)
        .with(cors)
        .with(warp::log("message_board"))
}
