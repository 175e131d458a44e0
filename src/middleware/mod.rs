//! Middleware module
//!
//! Request-level middleware layered onto the router

pub mod logging;
