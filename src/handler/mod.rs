//! The `handler` module is the invocation entry point of the service.
//!
//! It accepts the (opaque) trigger event and context from the hosting
//! runtime, builds one telemetry message for the configured device, hands
//! it to the publish client, and reports a fixed success response.

pub mod entry;

pub use entry::{Response, handle};

#[cfg(test)]
mod tests;
