//! Declaration of custom GraphQL schema directives, and extraction of the arguments of their
//! applied instances at schema generation time.
//!
//! ```
//! use graphql_schema_directives::{
//!     schema_directive, ArgumentValue, DirectiveFields, DirectiveRegistry, DirectiveType, Location,
//! };
//! use serde_json::json;
//!
//! #[derive(serde::Serialize)]
//! struct CacheControl {
//!     max_age: i32,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     scope: Option<String>,
//! }
//!
//! impl DirectiveType for CacheControl {
//!     const NAME: &'static str = "CacheControl";
//!
//!     fn fields() -> DirectiveFields {
//!         DirectiveFields::new().field("max_age", "Int").field("scope", "String")
//!     }
//! }
//!
//! let mut registry = DirectiveRegistry::default();
//! schema_directive([Location::Object, Location::FieldDefinition])
//!     .declare::<CacheControl>(&mut registry)?;
//!
//! let values = registry.applied_values(&CacheControl { max_age: 60, scope: None })?;
//!
//! assert_eq!(values["maxAge"], ArgumentValue::Provided(json!(60)));
//! assert_eq!(values["scope"], ArgumentValue::Unset);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod declare;
mod definition;
mod error;
mod field;
mod location;
mod naming;
mod registry;
mod value;

pub use declare::{schema_directive, DirectiveType, SchemaDirective};
pub use definition::{DirectiveDefinition, Origin};
pub use error::{DeclarationError, ExtractionError, ResolutionError};
pub use field::{DirectiveField, DirectiveFields};
pub use location::Location;
pub use naming::{NameConverter, SchemaContext};
pub use registry::DirectiveRegistry;
pub use value::{AppliedDirective, ArgumentValue, AttributeMap};

pub use schema_directives_config as config;
