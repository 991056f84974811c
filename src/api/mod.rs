//! HTTP API layer: handlers, middleware, DTOs, and route wiring.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
