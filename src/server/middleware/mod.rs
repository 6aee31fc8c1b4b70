//! Request/response middleware.

pub mod preflight;
