use crate::storage::StorageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("campo \"opcao\" é obrigatório")]
    MissingOption,

    #[error("opção não encontrada: {0}")]
    UnknownOption(String),

    #[error("falha ao persistir votos: {0}")]
    Persistence(#[from] StorageError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingOption => StatusCode::BAD_REQUEST,
            AppError::UnknownOption(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::MissingOption => "opcao_ausente",
            AppError::UnknownOption(_) => "opcao_desconhecida",
            AppError::Persistence(_) => "falha_persistencia",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    erro: String,
    codigo: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            erro: self.to_string(),
            codigo: self.code(),
        };

        (self.status(), Json(body)).into_response()
    }
}
