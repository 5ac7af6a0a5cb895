use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

/// Plain acknowledgement body.
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the client body from a domain error whose message is already a code.
///
/// Server side failures are logged with their full source chain; the client
/// only ever sees the code.
pub fn error_response<E>(status: StatusCode, name: &str, err: &E) -> (StatusCode, Json<ErrorResponse>)
where
    E: std::error::Error,
{
    if status.is_server_error() {
        let cause = err
            .source()
            .map(|source| source.to_string())
            .unwrap_or_default();
        tracing::error!(target: "PromptPrint -- ", error = %err, cause = %cause, "{}", name);
    }

    (status, ErrorResponse::new(name, &err.to_string()))
}

pub fn invalid_id(message: &str) -> Json<ErrorResponse> {
    ErrorResponse::new("ValidationError", message)
}
