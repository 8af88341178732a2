use std::any::{type_name, TypeId};

use indexmap::{map::Entry, IndexMap};

use crate::{
    AppliedDirective, ArgumentValue, DeclarationError, DirectiveField, DirectiveFields, ExtractionError, Location,
    ResolutionError, SchemaContext, SchemaDirective,
};

/// The Rust type a directive was declared from. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    type_id: TypeId,
    type_name: &'static str,
}

impl Origin {
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// The declaration of a custom schema directive.
///
/// Built once per directive type by [`SchemaDirective::declare`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    internal_name: String,
    schema_name: Option<String>,
    locations: Vec<Location>,
    fields: Vec<DirectiveField>,
    description: Option<String>,
    repeatable: bool,
    print_definition: bool,
    origin: Option<Origin>,
}

impl DirectiveDefinition {
    /// Builds and validates a declaration.
    ///
    /// Fails when no location is given, when a location is repeated, or when the naming policy
    /// rejects a name or resolves two arguments to the same name.
    pub fn new(
        internal_name: impl Into<String>,
        options: &SchemaDirective,
        fields: impl Into<DirectiveFields>,
        origin: Option<Origin>,
        context: &(impl SchemaContext + ?Sized),
    ) -> Result<Self, DeclarationError> {
        let fields: DirectiveFields = fields.into();
        let SchemaDirective {
            locations,
            description,
            name,
            repeatable,
            print_definition,
        } = options.clone();

        let definition = DirectiveDefinition {
            internal_name: internal_name.into(),
            schema_name: name,
            locations,
            fields: fields.into(),
            description,
            repeatable,
            print_definition,
            origin,
        };

        definition.validate(context)?;

        Ok(definition)
    }

    fn validate(&self, context: &(impl SchemaContext + ?Sized)) -> Result<(), DeclarationError> {
        if self.locations.is_empty() {
            return Err(DeclarationError::EmptyLocations {
                directive: self.internal_name.clone(),
            });
        }

        for (idx, location) in self.locations.iter().enumerate() {
            if self.locations[..idx].contains(location) {
                return Err(DeclarationError::DuplicateLocation {
                    directive: self.internal_name.clone(),
                    location: *location,
                });
            }
        }

        context
            .resolve_directive_name(self)
            .map_err(|source| DeclarationError::InvalidName {
                directive: self.internal_name.clone(),
                source,
            })?;

        let mut argument_names = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let name = context
                .resolve_schema_name(field)
                .map_err(|source| DeclarationError::InvalidName {
                    directive: self.internal_name.clone(),
                    source,
                })?;

            if argument_names.contains(&name) {
                return Err(DeclarationError::DuplicateArgument {
                    directive: self.internal_name.clone(),
                    name,
                });
            }

            argument_names.push(name);
        }

        Ok(())
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// The explicit schema name, if any. See [`DirectiveDefinition::schema_name_in`] for the
    /// rendered name.
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Declared arguments, in declaration order.
    pub fn fields(&self) -> &[DirectiveField] {
        &self.fields
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// Whether the definition of the directive is rendered in the schema text.
    pub fn print_definition(&self) -> bool {
        self.print_definition
    }

    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// The name rendered in the schema under the given naming policy.
    pub fn schema_name_in(&self, context: &(impl SchemaContext + ?Sized)) -> Result<String, ResolutionError> {
        context.resolve_directive_name(self)
    }

    /// Arguments of an applied instance of this directive, keyed by their schema-visible name.
    ///
    /// Every declared field is present in the result, in declaration order. Fields never assigned
    /// on `directive` are [`ArgumentValue::Unset`].
    #[tracing::instrument(level = "trace", skip_all, fields(directive = %self.internal_name))]
    pub fn get_applied_values(
        &self,
        directive: &(impl AppliedDirective + ?Sized),
        context: &(impl SchemaContext + ?Sized),
    ) -> Result<IndexMap<String, ArgumentValue>, ExtractionError> {
        let mut values = IndexMap::with_capacity(self.fields.len());

        for field in &self.fields {
            let name = context
                .resolve_schema_name(field)
                .map_err(|source| ExtractionError::Resolution {
                    directive: self.internal_name.clone(),
                    field: field.name().to_owned(),
                    source,
                })?;

            let value = directive.attribute(field.attribute()).unwrap_or(ArgumentValue::Unset);

            tracing::trace!(argument = %name, unset = value.is_unset(), "Read directive argument");

            match values.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(ExtractionError::DuplicateArgument {
                        directive: self.internal_name.clone(),
                        name: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }

        Ok(values)
    }
}
