//! Data transfer objects
//!
//! Wire envelopes for API calls whose payloads do not map one-to-one onto a
//! domain type.

pub mod graphql;
