use super::request_state::RequestState;
use super::texts;

/// Результат загрузки файла, различаемый только по классу HTTP статуса
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Сервис ответил успешным статусом
    Uploaded,
    /// Сервис ответил неуспешным статусом; тело игнорируется
    Rejected { status: u16 },
    /// Ответ не получен (сеть недоступна и т.п.)
    TransportFailed,
}

impl UploadOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            UploadOutcome::Uploaded
        } else {
            UploadOutcome::Rejected { status }
        }
    }

    /// Текст сообщения бота для этого результата
    pub fn bot_text(&self, file_name: &str) -> String {
        match self {
            UploadOutcome::Uploaded => texts::upload_succeeded(file_name),
            UploadOutcome::Rejected { .. } => texts::UPLOAD_FAILED.to_string(),
            UploadOutcome::TransportFailed => texts::UPLOAD_TRANSPORT_ERROR.to_string(),
        }
    }
}

/// Состояние последней загрузки (одновременно не больше одной)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadStatus {
    pub upload: RequestState,
    pub file_name: Option<String>,
}

impl UploadStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_pending()
    }

    /// Idle -> Pending, сбрасывает показанное имя файла.
    /// `false`, если загрузка уже идёт.
    pub fn begin(&mut self) -> bool {
        if !self.upload.try_begin() {
            return false;
        }
        self.file_name = None;
        true
    }

    /// Pending -> Idle при любом результате; имя файла запоминается только при успехе
    pub fn settle(&mut self, outcome: &UploadOutcome, file_name: &str) {
        if matches!(outcome, UploadOutcome::Uploaded) {
            self.file_name = Some(file_name.to_string());
        }
        self.upload.settle();
    }

    pub fn label(&self) -> String {
        if self.is_uploading() {
            return texts::UPLOAD_PENDING_LABEL.to_string();
        }
        match &self.file_name {
            Some(name) => texts::uploaded_label(name),
            None => texts::UPLOAD_IDLE_LABEL.to_string(),
        }
    }
}
