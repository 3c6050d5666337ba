use super::message::{Message, MessageId, Sender};

/// Транскрипт чата: упорядоченный список сообщений текущей сессии.
///
/// Только добавление. Порядок вставки совпадает с порядком отображения
/// и хронологическим порядком.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Добавить сообщение с идентификатором от текущего времени
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        self.append_at(sender, text, MessageId::now_millis())
    }

    /// Добавить сообщение, созданное в момент `now_ms`.
    ///
    /// Идентификатор равен `now_ms`, но не меньше предыдущего + 1: два
    /// сообщения в одном тике (или при откате часов) всё равно получают
    /// различные, возрастающие id.
    pub fn append_at(&mut self, sender: Sender, text: impl Into<String>, now_ms: i64) -> &Message {
        let id = match self.messages.last() {
            Some(prev) => now_ms.max(prev.id.value() + 1),
            None => now_ms,
        };
        self.messages
            .push(Message::new(MessageId(id), sender, text.into()));
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut t = Transcript::new();
        t.append_at(Sender::User, "Hello", 100);
        t.append_at(Sender::Bot, "Hi!", 200);

        let texts: Vec<&str> = t.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "Hi!"]);
        assert_eq!(t.messages()[0].sender, Sender::User);
        assert_eq!(t.messages()[1].sender, Sender::Bot);
    }

    #[test]
    fn test_ids_distinct_within_same_tick() {
        let mut t = Transcript::new();
        let a = t.append_at(Sender::User, "a", 1_000).id;
        let b = t.append_at(Sender::Bot, "b", 1_000).id;
        let c = t.append_at(Sender::Bot, "c", 1_000).id;
        assert_eq!(a, MessageId(1_000));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_ids_increase_when_clock_goes_back() {
        let mut t = Transcript::new();
        let a = t.append_at(Sender::User, "a", 5_000).id;
        let b = t.append_at(Sender::Bot, "b", 4_000).id;
        assert!(b > a);
    }

    #[test]
    fn test_ids_follow_clock_when_it_advances() {
        let mut t = Transcript::new();
        t.append_at(Sender::User, "a", 10);
        let b = t.append_at(Sender::Bot, "b", 500).id;
        assert_eq!(b, MessageId(500));
    }

    #[test]
    fn test_append_with_wall_clock() {
        let mut t = Transcript::new();
        for i in 0..50 {
            t.append(Sender::User, format!("m{}", i));
        }
        let ids: Vec<MessageId> = t.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
