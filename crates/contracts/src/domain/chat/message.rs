use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Автор сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Sender::User)
    }
}

/// Идентификатор сообщения: миллисекунды с эпохи на момент создания.
///
/// Уникален в пределах сессии и строго возрастает в порядке создания,
/// см. [`super::Transcript::append_at`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MessageId(pub i64);

impl MessageId {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Текущее время в миллисекундах, источник для новых идентификаторов
    pub fn now_millis() -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Сообщение чата. Неизменяемо после создания, создаётся только транскриптом.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub(super) fn new(id: MessageId, sender: Sender, text: String) -> Self {
        Self { id, sender, text }
    }

    pub fn is_user(&self) -> bool {
        self.sender.is_user()
    }
}
