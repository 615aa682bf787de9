use axum::{
    extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

#[derive(thiserror::Error)]
pub enum AppError {
    #[error("The request body could not be read")]
    InvalidPayload(#[from] JsonRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(rejection) => rejection.status(),
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
            details: String,
        }

        tracing::info!(error.cause_chain = ?self, error.message = %self);

        let message = format!("{self}");
        let details = format!("{:?}", self);
        let body = axum::Json(ErrorResponse { message, details });

        let status_code = self.status_code();
        let mut response = (status_code, body).into_response();
        response
            .extensions_mut()
            .insert(std::sync::Arc::new(anyhow::anyhow!(self)));

        response
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
