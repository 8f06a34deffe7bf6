// src/presentation/http/mod.rs
pub mod binding;
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
