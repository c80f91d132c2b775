pub mod envelope;
pub mod routes;
pub mod server;
