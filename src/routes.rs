// Route definitions

use crate::handlers;
use crate::models::ReplyResult;
use crate::relay::Relay;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures_util::{pin_mut, Stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::warn;
use warp::http::{Method, StatusCode};
use warp::reject::Reject;
use warp::{Filter, Rejection};

/// Largest accepted request body (100 KiB)
pub const MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Debug)]
struct PayloadTooLarge;

impl Reject for PayloadTooLarge {}

#[derive(Debug)]
struct BodyReadFailed;

impl Reject for BodyReadFailed {}

pub fn configure_routes(
    relay: Arc<Relay>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // /api/chat (serverless layout) and /chat (standalone layout) behave the same.
    // Any method is accepted here so the handler can answer 405 as JSON.
    let chat = warp::path!("api" / "chat")
        .or(warp::path!("chat"))
        .unify()
        .and(warp::method())
        .and(limited_body(MAX_BODY_BYTES))
        .and(with_relay(relay))
        .and_then(handlers::chat_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec![Method::POST, Method::OPTIONS])
        .allow_headers(vec!["content-type"]);

    chat.recover(handle_rejection).with(cors)
}

fn with_relay(relay: Arc<Relay>) -> impl Filter<Extract = (Arc<Relay>,), Error = Infallible> + Clone {
    warp::any().map(move || relay.clone())
}

// Reads the body incrementally and stops once it passes `limit`. Requests
// without a content-length (GET, chunked uploads) are still accepted.
fn limited_body(limit: usize) -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::body::stream().and_then(move |body| collect_body(body, limit))
}

async fn collect_body<S, B>(body: S, limit: usize) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    pin_mut!(body);
    let mut collected = BytesMut::new();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(error = %e, "failed to read request body");
            warp::reject::custom(BodyReadFailed)
        })?;
        if collected.len() + chunk.remaining() > limit {
            return Err(warp::reject::custom(PayloadTooLarge));
        }
        collected.put(chunk);
    }

    Ok(collected.freeze())
}

async fn handle_rejection(rejection: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if rejection.find::<PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    } else if rejection.find::<BodyReadFailed>().is_some() {
        (StatusCode::BAD_REQUEST, "No messages provided")
    } else {
        warn!(?rejection, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };

    let body = ReplyResult::Error {
        error: message.to_string(),
    };
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
