use super::composer::{chat_reply_text, ComposerState};
use super::message::{Message, Sender};
use super::transcript::Transcript;
use super::upload::{UploadOutcome, UploadStatus};
use crate::shared::error::ApiError;

/// Всё состояние одного окна чата на время жизни страницы.
///
/// Чат и загрузка независимы: каждый вид запроса проходит
/// `Idle -> Pending -> Idle`, а любой исход превращается ровно в одно
/// сообщение бота.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    pub transcript: Transcript,
    pub composer: ComposerState,
    pub upload: UploadStatus,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    /// Строка "печатает…" видна, пока запрос к чату в полёте
    pub fn show_typing(&self) -> bool {
        self.composer.is_sending()
    }

    /// Отправить черновик.
    ///
    /// При успехе добавляет сообщение пользователя и возвращает текст,
    /// который нужно отправить в чат-сервис. `None` означает, что запрос
    /// делать не нужно и ничего не изменилось.
    pub fn submit_message(&mut self) -> Option<String> {
        let text = self.composer.begin_send()?;
        self.transcript.append(Sender::User, text.clone());
        Some(text)
    }

    /// Завершение запроса к чату: одно сообщение бота, затем `Idle`
    pub fn finish_chat(&mut self, result: Result<String, ApiError>) {
        self.transcript.append(Sender::Bot, chat_reply_text(result));
        self.composer.settle();
    }

    /// `false`, если загрузка уже идёт
    pub fn begin_upload(&mut self) -> bool {
        self.upload.begin()
    }

    /// Завершение загрузки: одно сообщение бота, затем `Idle`
    pub fn finish_upload(&mut self, outcome: UploadOutcome, file_name: &str) {
        self.transcript
            .append(Sender::Bot, outcome.bot_text(file_name));
        self.upload.settle(&outcome, file_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::texts;

    fn with_draft(session: &mut ChatSession, draft: &str) {
        session.composer.draft = draft.to_string();
    }

    #[test]
    fn test_empty_session() {
        let s = ChatSession::new();
        assert!(s.transcript.is_empty());
        assert!(!s.show_typing());
        assert_eq!(s.upload.label(), texts::UPLOAD_IDLE_LABEL);
    }

    #[test]
    fn test_hello_round_trip() {
        let mut s = ChatSession::new();
        with_draft(&mut s, "Hello");

        let query = s.submit_message();
        assert_eq!(query.as_deref(), Some("Hello"));
        assert!(s.show_typing());
        assert_eq!(s.transcript.len(), 1);

        s.finish_chat(Ok("Hi there".to_string()));
        assert!(!s.show_typing());

        let msgs = s.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!((msgs[0].sender, msgs[0].text.as_str()), (Sender::User, "Hello"));
        assert_eq!((msgs[1].sender, msgs[1].text.as_str()), (Sender::Bot, "Hi there"));
    }

    #[test]
    fn test_each_round_trip_adds_two() {
        let mut s = ChatSession::new();
        let replies: Vec<Result<String, ApiError>> = vec![
            Ok("one".into()),
            Err(ApiError::Transport("offline".into())),
            Ok(String::new()),
            Err(ApiError::Status(502)),
        ];
        for (i, reply) in replies.into_iter().enumerate() {
            with_draft(&mut s, &format!("q{}", i));
            assert!(s.submit_message().is_some());
            s.finish_chat(reply);
            assert_eq!(s.transcript.len(), (i + 1) * 2);
        }
    }

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut s = ChatSession::new();
        with_draft(&mut s, "   ");
        let before = s.clone();
        assert_eq!(s.submit_message(), None);
        assert_eq!(s, before);
    }

    #[test]
    fn test_chat_failure_appends_fixed_text() {
        let mut s = ChatSession::new();
        with_draft(&mut s, "Hello");
        s.submit_message();
        s.finish_chat(Err(ApiError::Transport("connection refused".into())));

        assert_eq!(s.transcript.len(), 2);
        assert_eq!(s.transcript.last().map(|m| m.text.as_str()), Some(texts::CHAT_FAILED));
        assert!(!s.composer.is_sending());
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut s = ChatSession::new();
        with_draft(&mut s, "first");
        assert!(s.submit_message().is_some());

        with_draft(&mut s, "second");
        assert_eq!(s.submit_message(), None);
        assert_eq!(s.transcript.len(), 1);

        s.finish_chat(Ok("reply".into()));
        assert_eq!(s.submit_message().as_deref(), Some("second"));
        assert_eq!(s.transcript.len(), 3);
    }

    #[test]
    fn test_upload_success() {
        let mut s = ChatSession::new();
        assert!(s.begin_upload());
        assert_eq!(s.upload.label(), texts::UPLOAD_PENDING_LABEL);

        s.finish_upload(UploadOutcome::Uploaded, "report.pdf");
        assert_eq!(s.transcript.len(), 1);
        let last = s.transcript.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("report.pdf"));
        assert_eq!(s.upload.file_name.as_deref(), Some("report.pdf"));
        assert!(!s.upload.is_uploading());
    }

    #[test]
    fn test_upload_failures() {
        let mut s = ChatSession::new();
        s.begin_upload();
        s.finish_upload(UploadOutcome::Rejected { status: 500 }, "report.pdf");
        s.begin_upload();
        s.finish_upload(UploadOutcome::TransportFailed, "report.pdf");

        let texts_seen: Vec<&str> = s.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts_seen, vec![texts::UPLOAD_FAILED, texts::UPLOAD_TRANSPORT_ERROR]);
        assert_eq!(s.upload.file_name, None);
        assert!(!s.upload.is_uploading());
    }

    #[test]
    fn test_chat_and_upload_are_independent() {
        let mut s = ChatSession::new();
        with_draft(&mut s, "Hello");
        assert!(s.submit_message().is_some());
        assert!(s.begin_upload());
        assert!(!s.begin_upload());

        s.finish_upload(UploadOutcome::Uploaded, "report.pdf");
        assert!(s.show_typing());
        s.finish_chat(Ok("done".into()));

        let ids: Vec<_> = s.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
