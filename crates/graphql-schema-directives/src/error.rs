use crate::Location;

/// An invalid directive declaration. Raised when the directive is declared, never on use.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    #[error("Directive `{directive}` must declare at least one location")]
    EmptyLocations { directive: String },
    #[error("Directive `{directive}` declares the {location} location more than once")]
    DuplicateLocation { directive: String, location: Location },
    #[error("Directive `{directive}` has more than one argument named `{name}`")]
    DuplicateArgument { directive: String, name: String },
    #[error("Invalid name in directive `{directive}`: {source}")]
    InvalidName {
        directive: String,
        #[source]
        source: ResolutionError,
    },
    #[error("Directive `{directive}` was already declared")]
    AlreadyDeclared { directive: String },
    #[error("Directive `{second}` is rendered as `@{name}`, which is already used by directive `{first}`")]
    DuplicateDirectiveName {
        name: String,
        first: String,
        second: String,
    },
    #[error("A directive registry was already installed for this process")]
    RegistryAlreadyInstalled,
}

/// The naming policy could not produce a schema-visible name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("`{name}` is not a valid GraphQL name")]
    InvalidName { name: String },
    #[error("`{name}` starts with `__`, which is reserved for introspection")]
    ReservedName { name: String },
}

/// Failure to extract the arguments of an applied directive. Fatal for the current render pass.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Could not resolve the name of argument `{field}` of directive `{directive}`: {source}")]
    Resolution {
        directive: String,
        field: String,
        #[source]
        source: ResolutionError,
    },
    #[error("Directive `{directive}` has more than one argument named `{name}`")]
    DuplicateArgument { directive: String, name: String },
    #[error("No directive was declared for type `{type_name}`")]
    NotDeclared { type_name: &'static str },
    #[error("Directive type `{type_name}` must serialize to an object to read its arguments")]
    NotAnObject { type_name: &'static str },
    #[error("Could not read the attributes of the applied directive: {0}")]
    Serialization(#[from] serde_json::Error),
}
