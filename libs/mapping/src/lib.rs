pub mod dispatch;
pub mod extractor;
pub mod filter;
pub mod sink {
    pub mod handle;
    pub mod message;
    pub mod transfer_event;
}
