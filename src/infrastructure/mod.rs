// src/infrastructure/mod.rs
pub mod http;
pub mod worker;

pub use http::HttpNoteStore;
pub use worker::StoreWorker;
