use std::sync::LazyLock;

use heck::ToLowerCamelCase;
use regex::Regex;
use schema_directives_config::NamingConfig;

use crate::{DirectiveDefinition, DirectiveField, ResolutionError};

/// https://spec.graphql.org/October2021/#Name
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("valid GraphQL name regex"));

/// Resolves the schema-visible names of directives and their arguments.
pub trait SchemaContext {
    fn resolve_schema_name(&self, field: &DirectiveField) -> Result<String, ResolutionError>;

    fn resolve_directive_name(&self, directive: &DirectiveDefinition) -> Result<String, ResolutionError>;
}

impl<T: SchemaContext + ?Sized> SchemaContext for &T {
    fn resolve_schema_name(&self, field: &DirectiveField) -> Result<String, ResolutionError> {
        (**self).resolve_schema_name(field)
    }

    fn resolve_directive_name(&self, directive: &DirectiveDefinition) -> Result<String, ResolutionError> {
        (**self).resolve_directive_name(directive)
    }
}

/// The default naming policy.
///
/// Explicit schema names are used as is. Other names are converted to lowerCamelCase when
/// `auto_camel_case` is enabled. Every resolved name must be a valid, non-reserved GraphQL name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameConverter {
    auto_camel_case: bool,
}

impl Default for NameConverter {
    fn default() -> Self {
        Self { auto_camel_case: true }
    }
}

impl NameConverter {
    pub fn new(auto_camel_case: bool) -> Self {
        Self { auto_camel_case }
    }

    pub fn auto_camel_case(&self) -> bool {
        self.auto_camel_case
    }

    fn apply_naming_config(&self, name: &str) -> String {
        if self.auto_camel_case {
            name.to_lower_camel_case()
        } else {
            name.to_owned()
        }
    }
}

impl From<&NamingConfig> for NameConverter {
    fn from(config: &NamingConfig) -> Self {
        Self::new(config.auto_camel_case)
    }
}

impl SchemaContext for NameConverter {
    fn resolve_schema_name(&self, field: &DirectiveField) -> Result<String, ResolutionError> {
        let name = match field.schema_name() {
            Some(name) => name.to_owned(),
            None => self.apply_naming_config(field.name()),
        };

        validate_name(name)
    }

    fn resolve_directive_name(&self, directive: &DirectiveDefinition) -> Result<String, ResolutionError> {
        let name = match directive.schema_name() {
            Some(name) => name.to_owned(),
            None => self.apply_naming_config(directive.internal_name()),
        };

        validate_name(name)
    }
}

fn validate_name(name: String) -> Result<String, ResolutionError> {
    if !NAME_REGEX.is_match(&name) {
        return Err(ResolutionError::InvalidName { name });
    }

    if name.starts_with("__") {
        return Err(ResolutionError::ReservedName { name });
    }

    Ok(name)
}
