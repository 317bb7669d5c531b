use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use roxinho_core::ProductRecord;
use roxinho_scraper::{FailureKind, ScraperError};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{AppState, ResponseMeta};

const MSG_URL_REQUIRED: &str = "URL é obrigatória";
const MSG_UNSUPPORTED: &str =
    "URL não suportada. Use um link do Mercado Livre, da Amazon ou de uma loja com dados de produto.";
const MSG_EXTRACTION_FAILED: &str = "Erro ao processar a URL";

#[derive(Debug, Deserialize)]
pub(super) struct ExtractRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ExtractResponse {
    success: bool,
    product: ProductRecord,
    platform: &'static str,
    meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub(super) struct ExtractFailure {
    #[serde(skip)]
    status: StatusCode,
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    meta: ResponseMeta,
}

impl ExtractFailure {
    fn new(request_id: String, status: StatusCode, message: &'static str, error: Option<String>) -> Self {
        Self {
            status,
            success: false,
            message,
            error,
            meta: ResponseMeta::new(request_id),
        }
    }

    fn from_scraper_error(request_id: String, error: &ScraperError) -> Self {
        match (error, error.kind()) {
            (ScraperError::MissingUrl, _) => {
                Self::new(request_id, StatusCode::BAD_REQUEST, MSG_URL_REQUIRED, None)
            }
            (_, FailureKind::BadRequest) => {
                tracing::warn!(
                    error = %error,
                    status = ?error.status(),
                    "product extraction rejected"
                );
                Self::new(
                    request_id,
                    StatusCode::BAD_REQUEST,
                    MSG_UNSUPPORTED,
                    Some(error.to_string()),
                )
            }
            (_, FailureKind::ServerError) => {
                tracing::error!(
                    error = %error,
                    status = ?error.status(),
                    "product extraction failed"
                );
                Self::new(
                    request_id,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_EXTRACTION_FAILED,
                    Some(error.to_string()),
                )
            }
        }
    }
}

impl IntoResponse for ExtractFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

pub(super) async fn extract_from_url(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ExtractFailure> {
    let url = match payload {
        Ok(Json(body)) => body.url,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable extract request body");
            None
        }
    };

    let extracted = state
        .extractor
        .extract_product(url.as_deref())
        .await
        .map_err(|e| ExtractFailure::from_scraper_error(req_id.0.clone(), &e))?;

    Ok(Json(ExtractResponse {
        success: true,
        platform: extracted.platform.response_tag(),
        product: extracted.product,
        meta: ResponseMeta::new(req_id.0),
    }))
}
