/// Profile fields copied from the Telegram chat at registration time.
/// Any of them may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

/// A registered user, keyed by the chat id Telegram assigned to the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub chat_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    /// Unix milliseconds of the first `/start`. Never rewritten.
    pub registered_at: i64,
}

impl User {
    pub fn register(chat_id: i64, profile: &ChatProfile, registered_at: i64) -> Self {
        Self {
            chat_id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            user_name: profile.user_name.clone(),
            registered_at,
        }
    }
}
