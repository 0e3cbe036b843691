// Adapters layer: concrete implementations for external systems (webhook server, messaging API)

pub mod graph_api;
pub mod http;
pub mod whatsapp;
