// POST /api/chat and POST /chat handler

use crate::error::RelayError;
use crate::models::ReplyResult;
use crate::relay::Relay;
use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;
use warp::http::{Method, StatusCode};

pub async fn chat_handler(
    method: Method,
    body: Bytes,
    relay: Arc<Relay>,
) -> Result<impl warp::Reply, Infallible> {
    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id, %method);

    let (status, payload) = async move {
        match relay.handle_chat(&method, &body).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "reply relayed");
                (StatusCode::OK, ReplyResult::Reply { reply })
            }
            Err(err) => {
                log_error(&err);
                (
                    err.status(),
                    ReplyResult::Error {
                        error: err.client_message().to_string(),
                    },
                )
            }
        }
    }
    .instrument(span)
    .await;

    Ok(warp::reply::with_status(
        warp::reply::json(&payload),
        status,
    ))
}

// Caller mistakes are warnings; server-side failures are errors
fn log_error(err: &RelayError) {
    if err.status().is_client_error() {
        warn!(error = %err, status = err.status().as_u16(), "chat request rejected");
    } else {
        error!(error = %err, status = err.status().as_u16(), "chat request failed");
    }
}
