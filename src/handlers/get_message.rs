// GET /messages/{messageId} handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::models::{ErrorResponse, MessagesResponse, STATUS_ALL_GOOD, STATUS_RETRIEVE_FAILED};
use crate::store::MessageStore;

/// The id is captured as a plain string and handed to the store unchanged;
/// an id that matches nothing (malformed ones included) is a success with an
/// empty list, not a 400.
pub async fn get_message_handler(
    message_id: String,
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    match store.find_by_id(&message_id).await {
        Ok(messages) => Ok(warp::reply::with_status(
            warp::reply::json(&MessagesResponse {
                messages,
                status: STATUS_ALL_GOOD.to_string(),
            }),
            StatusCode::OK,
        )),
        Err(err) => {
            log::error!("GET /messages/{}: {}", message_id, err);
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
