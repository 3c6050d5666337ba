//! Адреса внешних сервисов загрузки и чата
//!
//! Значения фиксированы; фронтенд кладёт один экземпляр в контекст при старте.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload/pdf";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_CHAT_QUERY_PARAM: &str = "message";
pub const DEFAULT_UPLOAD_FIELD: &str = "pdf";
pub const DEFAULT_ACCEPT_MIME: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEndpoints {
    pub base_url: String,
    pub upload_path: String,
    pub chat_path: String,
    /// Имя query-параметра с текстом сообщения
    pub chat_query_param: String,
    /// Имя поля multipart с файлом
    pub upload_field: String,
    /// Фильтр выбора файла (только на уровне UI)
    pub accept_mime: String,
}

impl Default for ChatEndpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            chat_query_param: DEFAULT_CHAT_QUERY_PARAM.to_string(),
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
            accept_mime: DEFAULT_ACCEPT_MIME.to_string(),
        }
    }
}

impl ChatEndpoints {
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.upload_path)
    }

    /// URL запроса к чату, сообщение передаётся percent-encoded
    pub fn chat_url(&self, message: &str) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url.trim_end_matches('/'),
            self.chat_path,
            self.chat_query_param,
            urlencoding::encode(message)
        )
    }
}
