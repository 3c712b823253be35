//! Thrive Careers API gateway.
//!
//! A stateless proxy between the web client and the platform's upstream
//! services: the assistant backend (job search, job detail, chat), the
//! jobs backend (listing CRUD and saved jobs), and the payment provider.
//! Each request performs at most one outbound call, and every failure is
//! normalized into a stable JSON shape the UI can render without
//! branching on errors.

pub mod backend;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod payments;
pub mod routes;
pub mod state;
