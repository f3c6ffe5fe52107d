//! Service registry.
//!
//! Engine subsystems (input, window, scenes, ...) are singletons owned by a
//! `ServiceRegistry` and looked up by their `ServiceKind`. Lookups are typed:
//! every registrable type declares the kind it fills through the `Service`
//! trait, so callers never cast.

mod error;
mod kind;
mod registry;

pub use error::ServiceError;
pub use kind::ServiceKind;
pub use registry::{Service, ServiceRegistry};
