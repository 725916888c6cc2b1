// POST /messages/save handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::models::{
    ErrorResponse, SaveMessageRequest, SavedMessageResponse, STATUS_ALL_GOOD, STATUS_SAVE_FAILED,
};
use crate::store::MessageStore;

pub async fn save_message_handler(
    request: SaveMessageRequest,
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    // No field validation here; a missing name or message is rejected by the
    // store and comes back as the generic save failure
    match store.create(request.name, request.message).await {
        Ok(message) => Ok(warp::reply::with_status(
            warp::reply::json(&SavedMessageResponse {
                message,
                status: STATUS_ALL_GOOD.to_string(),
            }),
            StatusCode::OK,
        )),
        Err(err) => {
            log::error!("POST /messages/save: {}", err);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: err.to_string(),
                    status: STATUS_SAVE_FAILED.to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ))
        }
    }
}
