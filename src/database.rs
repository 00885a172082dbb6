pub mod db;
pub mod dto;
pub mod repository;
pub mod service;

// Re-export the service facade for convenience.
pub use service::*;
