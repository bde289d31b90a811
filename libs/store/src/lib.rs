pub mod client;
pub mod message {
    pub mod adapter;
    pub mod model;
    pub mod store;
}
pub mod transfer_event {
    pub mod adapter;
    pub mod model;
    pub mod store;
}
