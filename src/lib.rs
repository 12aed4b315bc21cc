pub mod campaign;
pub mod chat;
pub mod completion;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;

pub use error::Error;
