//! Chat View - Model (API functions)

use contracts::domain::chat::UploadOutcome;
use contracts::shared::endpoints::ChatEndpoints;
use contracts::shared::error::ApiError;
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Отправить сообщение в чат-сервис.
///
/// Статус ответа не проверяется: любое прочитанное тело считается ответом
/// и показывается как есть.
pub async fn send_chat_query(endpoints: &ChatEndpoints, message: &str) -> Result<String, ApiError> {
    let response = Request::get(&endpoints.chat_url(message))
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

    log::debug!("chat response status {}", response.status());

    response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))
}

/// Загрузить PDF как multipart/form-data.
///
/// Ответ интерпретируется только по классу статуса, тело игнорируется.
pub async fn upload_pdf(endpoints: &ChatEndpoints, file: &File) -> Result<UploadOutcome, ApiError> {
    let form_data = FormData::new().map_err(ApiError::transport)?;
    form_data
        .append_with_blob_and_filename(&endpoints.upload_field, file, &file.name())
        .map_err(ApiError::transport)?;

    let response = Request::post(&endpoints.upload_url())
        .body(form_data)
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

    Ok(UploadOutcome::from_status(response.status()))
}
