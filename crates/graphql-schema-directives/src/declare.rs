use std::{any::TypeId, sync::Arc};

use schema_directives_config::DirectiveConfig;

use crate::{
    registry::DirectiveKey, DeclarationError, DirectiveDefinition, DirectiveFields, DirectiveRegistry, Location,
    Origin,
};

/// A Rust type declaring a custom schema directive.
///
/// ```
/// use graphql_schema_directives::{DirectiveFields, DirectiveType};
///
/// struct CacheControl {
///     max_age: Option<i32>,
/// }
///
/// impl DirectiveType for CacheControl {
///     const NAME: &'static str = "CacheControl";
///
///     fn fields() -> DirectiveFields {
///         DirectiveFields::new().field("max_age", "Int")
///     }
/// }
/// ```
pub trait DirectiveType: 'static {
    /// The declared name, used when no schema name is given.
    const NAME: &'static str;

    /// The arguments of the directive, in declaration order.
    fn fields() -> DirectiveFields;
}

/// Starts the declaration of a schema directive applicable to `locations`.
pub fn schema_directive(locations: impl IntoIterator<Item = Location>) -> SchemaDirective {
    SchemaDirective {
        locations: locations.into_iter().collect(),
        description: None,
        name: None,
        repeatable: false,
        print_definition: true,
    }
}

/// Declaration options of a schema directive, see [`schema_directive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDirective {
    pub(crate) locations: Vec<Location>,
    pub(crate) description: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) repeatable: bool,
    pub(crate) print_definition: bool,
}

impl SchemaDirective {
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the name rendered in the schema.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Whether the directive definition is rendered in the schema text. Defaults to true.
    #[must_use]
    pub fn print_definition(mut self, print_definition: bool) -> Self {
        self.print_definition = print_definition;
        self
    }

    /// Declares `T` as a schema directive in `registry`.
    ///
    /// Exactly one [`DirectiveDefinition`] is built from these options and the fields of `T`, and
    /// recorded under the identity of `T`. Invalid declarations fail here, not on first use.
    pub fn declare<T: DirectiveType>(
        &self,
        registry: &mut DirectiveRegistry,
    ) -> Result<Arc<DirectiveDefinition>, DeclarationError> {
        let definition = DirectiveDefinition::new(
            T::NAME,
            self,
            T::fields(),
            Some(Origin::of::<T>()),
            registry.name_converter(),
        )?;

        registry.insert(DirectiveKey::Type(TypeId::of::<T>()), definition)
    }

    /// Declares a directive without a backing Rust type. The internal name identifies it in the
    /// registry.
    pub fn declare_untyped(
        &self,
        internal_name: impl Into<String>,
        fields: impl Into<DirectiveFields>,
        registry: &mut DirectiveRegistry,
    ) -> Result<Arc<DirectiveDefinition>, DeclarationError> {
        let internal_name = internal_name.into();
        let definition = DirectiveDefinition::new(internal_name.clone(), self, fields, None, registry.name_converter())?;

        registry.insert(DirectiveKey::Untyped(internal_name), definition)
    }
}

impl From<&DirectiveConfig> for SchemaDirective {
    fn from(config: &DirectiveConfig) -> Self {
        SchemaDirective {
            locations: config.locations.iter().copied().map(Location::from).collect(),
            description: config.description.clone(),
            name: config.name.clone(),
            repeatable: config.repeatable,
            print_definition: config.print_definition,
        }
    }
}
