pub mod block;
pub mod decoded;
pub mod event;
pub mod message;

pub use block::{BlockHeader, CosmosBlock};
pub use decoded::{Coin, MsgSend};
pub use event::{CosmosEvent, EventAttribute, EventMessage, TxEvent};
pub use message::{CosmosMessage, CosmosTransaction, DecodedMessage};
