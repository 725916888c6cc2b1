// GET /messages handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::models::{ErrorResponse, MessagesResponse, STATUS_ALL_GOOD, STATUS_RETRIEVE_FAILED};
use crate::store::MessageStore;

pub async fn list_messages_handler(
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    match store.list_all().await {
        Ok(messages) => Ok(warp::reply::with_status(
            warp::reply::json(&MessagesResponse {
                messages,
                status: STATUS_ALL_GOOD.to_string(),
            }),
            StatusCode::OK,
        )),
        Err(err) => {
            log::error!("GET /messages: {}", err);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: err.to_string(),
                    status: STATUS_RETRIEVE_FAILED.to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ))
        }
    }
}
