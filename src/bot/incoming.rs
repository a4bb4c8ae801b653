use crate::types::user::ChatProfile;
use teloxide::types::{Message, Update, UpdateKind};

/// The parts of an inbound text message the dispatcher works with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub text: String,
    pub profile: ChatProfile,
}

impl IncomingMessage {
    /// Returns `None` unless the update is a new message carrying text.
    pub fn from_update(update: &Update) -> Option<Self> {
        match &update.kind {
            UpdateKind::Message(msg) => Self::from_message(msg),
            _ => None,
        }
    }

    pub fn from_message(msg: &Message) -> Option<Self> {
        let text = msg.text()?;
        Some(Self {
            chat_id: msg.chat.id.0,
            text: text.to_string(),
            profile: ChatProfile {
                first_name: msg.chat.first_name().map(str::to_string),
                last_name: msg.chat.last_name().map(str::to_string),
                user_name: msg.chat.username().map(str::to_string),
            },
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use serde_json::{json, Value};

    // Teloxide only decodes messages from a JSON string; a `Value` ends up as
    // `UpdateKind::Error`.
    fn parse_update(value: Value) -> Update {
        let update: Update = serde_json::from_str(&value.to_string()).unwrap();
        assert!(
            matches!(update.kind, UpdateKind::Message(_)),
            "fixture did not decode as a message: {:?}",
            update.kind
        );
        update
    }

    fn private_chat(chat_id: i64, first_name: &str) -> Value {
        json!({
            "id": chat_id,
            "type": "private",
            "first_name": first_name,
            "last_name": "Lee",
            "username": "annlee"
        })
    }

    pub fn text_update(chat_id: i64, first_name: &str, text: &str) -> Update {
        parse_update(json!({
            "update_id": 1,
            "message": {
                "message_id": 10,
                "date": 1700000000,
                "chat": private_chat(chat_id, first_name),
                "from": {
                    "id": chat_id,
                    "is_bot": false,
                    "first_name": first_name
                },
                "text": text
            }
        }))
    }

    pub fn service_update(chat_id: i64) -> Update {
        parse_update(json!({
            "update_id": 2,
            "message": {
                "message_id": 11,
                "date": 1700000000,
                "chat": {
                    "id": chat_id,
                    "type": "group",
                    "title": "Old title"
                },
                "from": {
                    "id": 1,
                    "is_bot": false,
                    "first_name": "Ann"
                },
                "new_chat_title": "New title"
            }
        }))
    }

    pub fn photo_update(chat_id: i64) -> Update {
        parse_update(json!({
            "update_id": 3,
            "message": {
                "message_id": 12,
                "date": 1700000000,
                "chat": private_chat(chat_id, "Ann"),
                "from": {
                    "id": chat_id,
                    "is_bot": false,
                    "first_name": "Ann"
                },
                "photo": [{
                    "file_id": "AgACAgIAAxkBAAIB",
                    "file_unique_id": "AQADxbIxG",
                    "file_size": 1024,
                    "width": 90,
                    "height": 90
                }]
            }
        }))
    }
}
