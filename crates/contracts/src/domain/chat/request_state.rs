/// Состояние запроса одного вида (чат или загрузка): `Idle -> Pending -> Idle`.
///
/// Отдельного состояния ошибки нет: ошибки становятся обычными
/// сообщениями бота в транскрипте.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Idle -> Pending. Возвращает `false`, если запрос уже в полёте.
    pub fn try_begin(&mut self) -> bool {
        match self {
            RequestState::Idle => {
                *self = RequestState::Pending;
                true
            }
            RequestState::Pending => false,
        }
    }

    /// Pending -> Idle, безусловно
    pub fn settle(&mut self) {
        *self = RequestState::Idle;
    }
}
