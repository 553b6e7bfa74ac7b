// src/services/mod.rs
pub mod prediction_client;
