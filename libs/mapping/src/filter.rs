use host::{CosmosEvent, CosmosMessage};

pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const TRANSFER_EVENT_TYPE: &str = "transfer";

/// Which messages and events the handlers subscribe to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFilter {
    pub message_type_url: String,
    pub event_type: String,
}

impl Default for HandlerFilter {
    fn default() -> Self {
        Self {
            message_type_url: MSG_SEND_TYPE_URL.to_string(),
            event_type: TRANSFER_EVENT_TYPE.to_string(),
        }
    }
}

impl HandlerFilter {
    pub fn matches_message(&self, msg: &CosmosMessage) -> bool {
        msg.type_url() == self.message_type_url
    }

    pub fn matches_event(&self, event: &CosmosEvent) -> bool {
        event.kind() == self.event_type
    }
}
