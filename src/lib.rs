//! Typed field codec for OData wire payloads and the models built on it.
//!
//! Records decode field by field through [`serialization::ParseNode`] and encode through
//! [`serialization::SerializationWriter`]. Polymorphic slots dispatch on `@odata.type` through a
//! [`serialization::DiscriminatorRegistry`]; every model registers itself in [`models::MODELS`] at start-up.

pub mod models;
pub mod round_trip;
pub mod serialization;
