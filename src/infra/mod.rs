// Adapters implementing the app ports

pub mod http_client;
