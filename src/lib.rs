//! Aura Interview - Guided business-process interview client.
//!
//! Walks a user through the AVA questions, persists answers to a process
//! store and shows the ontology compiled from them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
