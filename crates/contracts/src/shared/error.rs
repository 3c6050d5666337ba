use thiserror::Error;

/// Ошибки обращения к внешним сервисам
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Ответ не получен или тело не удалось прочитать как текст
    #[error("transport error: {0}")]
    Transport(String),
    /// Сервис ответил неуспешным статусом
    #[error("HTTP {0}")]
    Status(u16),
}

impl ApiError {
    pub fn transport(e: impl std::fmt::Debug) -> Self {
        ApiError::Transport(format!("{e:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            ApiError::Transport("no window".into()).to_string(),
            "transport error: no window"
        );
    }

    #[test]
    fn test_transport_from_debug() {
        assert_eq!(
            ApiError::transport("refused"),
            ApiError::Transport("\"refused\"".into())
        );
    }
}
