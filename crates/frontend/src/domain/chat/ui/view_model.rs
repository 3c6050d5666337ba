//! Chat View - View Model

use super::model::{send_chat_query, upload_pdf};
use contracts::domain::chat::{ChatSession, UploadOutcome};
use contracts::shared::endpoints::ChatEndpoints;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ChatViewVm {
    pub session: RwSignal<ChatSession>,
    pub endpoints: StoredValue<ChatEndpoints>,
}

impl ChatViewVm {
    pub fn new(endpoints: ChatEndpoints) -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            endpoints: StoredValue::new(endpoints),
        }
    }

    pub fn set_draft(&self, text: String) {
        self.session.update(|s| s.composer.draft = text);
    }

    /// Отправить черновик. Пустой черновик или запрос в полёте - ничего не делает.
    pub fn submit_message(&self) {
        let Some(text) = self.session.try_update(|s| s.submit_message()).flatten() else {
            return;
        };

        let session = self.session;
        let endpoints = self.endpoints.get_value();
        spawn_local(async move {
            log::debug!("chat request: {} chars", text.chars().count());
            let result = send_chat_query(&endpoints, &text).await;
            if let Err(e) = &result {
                log::warn!("chat request failed: {}", e);
            }
            session.update(|s| s.finish_chat(result));
        });
    }

    /// Загрузить выбранный файл. Пока идёт предыдущая загрузка - ничего не делает.
    pub fn upload_file(&self, file: web_sys::File) {
        if !self.session.try_update(|s| s.begin_upload()).unwrap_or(false) {
            return;
        }

        let session = self.session;
        let endpoints = self.endpoints.get_value();
        spawn_local(async move {
            let file_name = file.name();
            log::debug!("uploading {} ({} bytes)", file_name, file.size());
            let outcome = match upload_pdf(&endpoints, &file).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("upload of {} failed: {}", file_name, e);
                    UploadOutcome::TransportFailed
                }
            };
            if let UploadOutcome::Rejected { status } = &outcome {
                log::warn!("upload of {} rejected with HTTP {}", file_name, status);
            }
            session.update(|s| s.finish_upload(outcome, &file_name));
        });
    }
}
