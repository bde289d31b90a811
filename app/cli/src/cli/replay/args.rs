use clap::Parser;
use mapping::filter::{HandlerFilter, MSG_SEND_TYPE_URL, TRANSFER_EVENT_TYPE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Replay decoded blocks, messages and events into SQLite", long_about = None)]
pub struct Args {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// JSON Lines file of decoded primitives
    #[arg(short, long)]
    pub input: PathBuf,

    /// Message type handled by the message handler
    #[arg(long, default_value = MSG_SEND_TYPE_URL)]
    pub message_type_url: String,

    /// Event type handled by the event handler
    #[arg(long, default_value = TRANSFER_EVENT_TYPE)]
    pub event_type: String,
}

impl Args {
    pub fn filter(&self) -> HandlerFilter {
        HandlerFilter {
            message_type_url: self.message_type_url.clone(),
            event_type: self.event_type.clone(),
        }
    }
}
