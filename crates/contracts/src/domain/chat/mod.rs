//! Chat domain module
//!
//! Состояние окна чата с загрузкой документа: транскрипт, поле ввода,
//! статус загрузки и переходы `Idle -> Pending -> Idle` для каждого вида запроса.

pub mod composer;
pub mod message;
pub mod request_state;
pub mod session;
pub mod texts;
pub mod transcript;
pub mod upload;

pub use composer::{chat_reply_text, ComposerState};
pub use message::{Message, MessageId, Sender};
pub use request_state::RequestState;
pub use session::ChatSession;
pub use transcript::Transcript;
pub use upload::{UploadOutcome, UploadStatus};
