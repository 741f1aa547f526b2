// Interface adapters: HTTP protocol and request handling.

pub mod handlers;
pub mod protocol;
pub mod routes;
