use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a plain-text response.
///
/// Storage details are logged, not sent to the client.
pub fn error_response(err: ServerError) -> Response {
    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::DbError(msg) => {
            tracing::error!(error = %msg, "Storage failure");
            "Internal Server Error".to_string()
        }
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(message))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
