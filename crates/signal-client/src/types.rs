//! Signal REST API wire types.
//!
//! Only the fields the router reads are modelled; everything else in the
//! envelope is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// One entry of a `/v1/receive` batch.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub envelope: Envelope,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Sender phone number.
    pub source: String,
    /// Absent for receipts and typing notifications.
    #[serde(default)]
    pub data_message: Option<DataMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub group_info: Option<GroupInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub group_id: String,
}

/// Body of `/v2/send`.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
    pub number: &'a str,
    pub recipients: [&'a str; 1],
    /// `data:<mime>;filename=<name>;base64,<data>` URIs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub base64_attachments: Vec<String>,
}

impl<'a> SendMessageRequest<'a> {
    pub fn text(number: &'a str, recipient: &'a str, message: &'a str) -> Self {
        Self {
            message,
            number,
            recipients: [recipient],
            base64_attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, data_uri: String) -> Self {
        self.base64_attachments.push(data_uri);
        self
    }
}

/// Response of `/v1/accounts/{number}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub number: String,
    #[serde(default)]
    pub registered: bool,
}

/// A text message ready for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMessage {
    pub source: String,
    pub text: String,
    /// Set for group messages.
    pub group_id: Option<String>,
}

impl BotMessage {
    /// The text message carried by an envelope, if any.
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let data = msg.envelope.data_message.as_ref()?;

        Some(Self {
            source: msg.envelope.source.clone(),
            text: data.message.clone()?,
            group_id: data.group_info.as_ref().map(|g| g.group_id.clone()),
        })
    }

    /// Where replies go: the group for group messages, the sender otherwise.
    pub fn reply_target(&self) -> &str {
        self.group_id.as_deref().unwrap_or(&self.source)
    }
}
