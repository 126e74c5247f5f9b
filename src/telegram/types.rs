//! Inbound Telegram update payloads.
//!
//! Only the fields the bot consumes are modeled; serde ignores the rest of
//! the update object.

use serde::Deserialize;

/// One entry from a webhook body or a `getUpdates` batch.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: i64,
    /// Absent for non-message updates (edits, channel posts, ...).
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Envelope returned by `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatesEnvelope {
    #[serde(default)]
    pub result: Vec<Update>,
}
