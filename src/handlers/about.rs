// GET /about handler

use std::convert::Infallible;

use warp::http::StatusCode;

use crate::models::AboutResponse;

const ABOUT_TEXT: &str = "Hi! I built this message board as a small exercise in \
    putting a REST API in front of a database. Leave a message on the home page \
    and it will show up for everyone else who visits. When I'm not writing \
    backend code I like hiking, cooking, and reading about distributed systems.";

const IMG_URL: &str = "https://i.pravatar.cc/300?img=12";

/// Serves constant biographical data. No store involved, no I/O, so unlike
/// the message routes this one cannot fail.
pub async fn about_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&AboutResponse {
            about_text: ABOUT_TEXT.to_string(),
            img_url: IMG_URL.to_string(),
        }),
        StatusCode::OK,
    ))
}
