use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use indexmap::IndexMap;
use schema_directives_config::{RedeclarationPolicy, SchemaDirectivesConfig};
use serde_json::Value;

use crate::{
    ArgumentValue, AttributeMap, DeclarationError, DirectiveDefinition, DirectiveType, ExtractionError, NameConverter,
};

static GLOBAL: OnceLock<DirectiveRegistry> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum DirectiveKey {
    Type(TypeId),
    Untyped(String),
}

/// Directive declarations of a schema, keyed by the type they were declared from.
///
/// Filled once at startup with [`SchemaDirective::declare`](crate::SchemaDirective::declare),
/// then only read. [`DirectiveRegistry::install`] makes it available process-wide.
#[derive(Debug, Default)]
pub struct DirectiveRegistry {
    name_converter: NameConverter,
    redeclaration: RedeclarationPolicy,
    definitions: Vec<Arc<DirectiveDefinition>>,
    // Resolved schema name of each definition, same order.
    schema_names: Vec<String>,
    keys: HashMap<DirectiveKey, usize>,
}

impl DirectiveRegistry {
    pub fn new(config: &SchemaDirectivesConfig) -> Self {
        Self {
            name_converter: NameConverter::from(&config.naming),
            redeclaration: config.redeclaration,
            ..Default::default()
        }
    }

    pub fn name_converter(&self) -> &NameConverter {
        &self.name_converter
    }

    pub fn redeclaration_policy(&self) -> RedeclarationPolicy {
        self.redeclaration
    }

    pub(crate) fn insert(
        &mut self,
        key: DirectiveKey,
        definition: DirectiveDefinition,
    ) -> Result<Arc<DirectiveDefinition>, DeclarationError> {
        let schema_name = definition
            .schema_name_in(&self.name_converter)
            .map_err(|source| DeclarationError::InvalidName {
                directive: definition.internal_name().to_owned(),
                source,
            })?;

        let existing = self.keys.get(&key).copied();

        if existing.is_some() && self.redeclaration == RedeclarationPolicy::Reject {
            return Err(DeclarationError::AlreadyDeclared {
                directive: definition.internal_name().to_owned(),
            });
        }

        if let Some(idx) = self
            .schema_names
            .iter()
            .position(|name| *name == schema_name)
            .filter(|idx| Some(*idx) != existing)
        {
            return Err(DeclarationError::DuplicateDirectiveName {
                name: schema_name,
                first: self.definitions[idx].internal_name().to_owned(),
                second: definition.internal_name().to_owned(),
            });
        }

        let definition = Arc::new(definition);

        match existing {
            Some(idx) => {
                tracing::warn!(
                    directive = definition.internal_name(),
                    "Directive declared more than once, replacing the previous declaration"
                );
                self.definitions[idx] = Arc::clone(&definition);
                self.schema_names[idx] = schema_name;
            }
            None => {
                tracing::debug!(
                    directive = definition.internal_name(),
                    schema_name = %schema_name,
                    "Declared schema directive"
                );
                self.keys.insert(key, self.definitions.len());
                self.definitions.push(Arc::clone(&definition));
                self.schema_names.push(schema_name);
            }
        }

        Ok(definition)
    }

    pub fn get<T: DirectiveType>(&self) -> Option<&Arc<DirectiveDefinition>> {
        self.get_by_type_id(TypeId::of::<T>())
    }

    pub fn get_by_type_id(&self, type_id: TypeId) -> Option<&Arc<DirectiveDefinition>> {
        self.keys
            .get(&DirectiveKey::Type(type_id))
            .map(|idx| &self.definitions[*idx])
    }

    /// Looks up a directive declared with [`SchemaDirective::declare_untyped`](crate::SchemaDirective::declare_untyped).
    pub fn get_untyped(&self, internal_name: &str) -> Option<&Arc<DirectiveDefinition>> {
        self.keys
            .get(&DirectiveKey::Untyped(internal_name.to_owned()))
            .map(|idx| &self.definitions[*idx])
    }

    /// Looks up a directive by the name it is rendered with, without the `@`.
    pub fn get_by_schema_name(&self, name: &str) -> Option<&Arc<DirectiveDefinition>> {
        self.schema_names
            .iter()
            .position(|schema_name| schema_name == name)
            .map(|idx| &self.definitions[idx])
    }

    /// All declarations with their schema name, in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Arc<DirectiveDefinition>)> + '_ {
        self.schema_names.iter().map(String::as_str).zip(self.definitions.iter())
    }

    /// Declarations whose definition is rendered in the schema text.
    pub fn printable(&self) -> impl Iterator<Item = (&str, &Arc<DirectiveDefinition>)> + '_ {
        self.iter().filter(|(_, definition)| definition.print_definition())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Arguments of an applied directive, read from its serialized form with the naming policy
    /// of this registry.
    ///
    /// The directive must serialize to an object, or to `null` when it declares no fields.
    pub fn applied_values<T>(&self, directive: &T) -> Result<IndexMap<String, ArgumentValue>, ExtractionError>
    where
        T: DirectiveType + serde::Serialize,
    {
        let definition = self
            .get::<T>()
            .ok_or(ExtractionError::NotDeclared { type_name: type_name::<T>() })?;

        // Unit structs serialize to null, which only stands for a directive without arguments.
        let attributes = match serde_json::to_value(directive)? {
            Value::Null if definition.fields().is_empty() => AttributeMap::new(),
            value => AttributeMap::from_json(value, type_name::<T>())?,
        };

        definition.get_applied_values(&attributes, &self.name_converter)
    }

    /// Makes this registry the process-wide registry. Can only succeed once per process.
    pub fn install(self) -> Result<&'static DirectiveRegistry, DeclarationError> {
        let mut installed = false;

        let registry = GLOBAL.get_or_init(|| {
            installed = true;
            self
        });

        if !installed {
            return Err(DeclarationError::RegistryAlreadyInstalled);
        }

        tracing::debug!(directives = registry.len(), "Installed directive registry");

        Ok(registry)
    }

    /// The process-wide registry, once installed.
    pub fn global() -> Option<&'static DirectiveRegistry> {
        GLOBAL.get()
    }
}

impl From<&SchemaDirectivesConfig> for DirectiveRegistry {
    fn from(config: &SchemaDirectivesConfig) -> Self {
        Self::new(config)
    }
}
