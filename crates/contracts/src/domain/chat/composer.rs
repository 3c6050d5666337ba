use super::request_state::RequestState;
use super::texts;
use crate::shared::error::ApiError;

/// Состояние поля ввода сообщения и запроса к чат-сервису
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
    pub chat: RequestState,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.chat.is_pending()
    }

    /// Кнопка отправки активна только для непустого черновика и без запроса в полёте
    pub fn can_send(&self) -> bool {
        !self.is_sending() && !self.draft.trim().is_empty()
    }

    /// Начать отправку черновика.
    ///
    /// Возвращает обрезанный текст, переводит чат в `Pending` и очищает
    /// черновик. Для пустого черновика или при запросе в полёте возвращает
    /// `None` и состояние не меняет.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.draft.trim().to_string();
        self.chat.try_begin();
        self.draft.clear();
        Some(text)
    }

    pub fn settle(&mut self) {
        self.chat.settle();
    }
}

/// Текст ответа бота по результату запроса к чату.
///
/// Тело ответа показывается как есть; любая ошибка заменяется
/// фиксированным текстом.
pub fn chat_reply_text(result: Result<String, ApiError>) -> String {
    match result {
        Ok(body) => body,
        Err(_) => texts::CHAT_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer(draft: &str) -> ComposerState {
        ComposerState {
            draft: draft.to_string(),
            chat: RequestState::Idle,
        }
    }

    #[test]
    fn test_begin_send_trims_and_clears() {
        let mut c = composer("  Hello \n");
        assert_eq!(c.begin_send(), Some("Hello".to_string()));
        assert!(c.draft.is_empty());
        assert!(c.is_sending());
    }

    #[test]
    fn test_blank_draft_is_noop() {
        for draft in ["", "   ", "\t\n "] {
            let mut c = composer(draft);
            let before = c.clone();
            assert_eq!(c.begin_send(), None);
            assert_eq!(c, before);
        }
    }

    #[test]
    fn test_pending_blocks_second_send() {
        let mut c = composer("first");
        assert!(c.begin_send().is_some());
        c.draft = "second".to_string();
        assert!(!c.can_send());
        assert_eq!(c.begin_send(), None);
        assert_eq!(c.draft, "second");

        c.settle();
        assert_eq!(c.begin_send(), Some("second".to_string()));
    }

    #[test]
    fn test_reply_text() {
        assert_eq!(chat_reply_text(Ok("  raw *body*\n".into())), "  raw *body*\n");
        assert_eq!(
            chat_reply_text(Err(ApiError::Transport("refused".into()))),
            texts::CHAT_FAILED
        );
    }
}
