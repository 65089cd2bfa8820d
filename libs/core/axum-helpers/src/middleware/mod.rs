//! Response-hardening middleware applied by [`create_router`](crate::server::create_router).

pub mod security;

pub use security::security_headers;
