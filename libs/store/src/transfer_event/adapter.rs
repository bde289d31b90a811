use crate::transfer_event::model::{TransferEvent, event_id};
use host::{CosmosEvent, EventAttribute};

impl TransferEvent {
    /// Assigns a known attribute to its field and ignores every other key.
    ///
    /// Repeated keys are last-write-wins: attributes are applied in order,
    /// so a later occurrence replaces an earlier one.
    pub fn apply_attribute(&mut self, attribute: &EventAttribute) {
        let field = match attribute.key.as_str() {
            "recipient" => &mut self.recipient,
            "amount" => &mut self.amount,
            "sender" => &mut self.sender,
            _ => return,
        };
        *field = Some(attribute.value.clone());
    }
}

impl From<&CosmosEvent> for TransferEvent {
    fn from(event: &CosmosEvent) -> Self {
        let mut record = TransferEvent::new(
            event_id(&event.tx.hash, event.msg.idx, event.idx),
            event.block.height(),
            event.tx.hash.clone(),
        );
        for attribute in &event.event.attributes {
            record.apply_attribute(attribute);
        }
        record
    }
}
