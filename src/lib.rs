// HTTP API layer
pub mod handlers;
pub mod models;
pub mod routes;

// Message store
pub mod store;
