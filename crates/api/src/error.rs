use actix_web::{http::StatusCode, HttpResponse};
use birthdays_api_structs::Envelope;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BirthdaysError {
    #[error("Internal server error. Error message: `{0}`")]
    InternalError(String),
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("Unauthorized request. Error message: `{0}`")]
    Unauthorized(String),
    #[error("Forbidden request. Error message: `{0}`")]
    Forbidden(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl BirthdaysError {
    /// The message sent to the client
    pub fn message(&self) -> &str {
        match self {
            Self::InternalError(msg)
            | Self::BadClientData(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg) => msg,
        }
    }
}

impl actix_web::error::ResponseError for BirthdaysError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Envelope::<()>::error(self.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[actix_web::test]
    async fn it_renders_the_envelope() {
        let err = BirthdaysError::Conflict("Le département existe déjà".into());
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let body = to_bytes(res.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "Le département existe déjà" })
        );
    }
}
