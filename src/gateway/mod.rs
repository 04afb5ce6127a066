//! HTTP gateways to external APIs.

pub mod zoom;
