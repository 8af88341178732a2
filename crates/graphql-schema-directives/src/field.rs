/// A declared argument of a schema directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveField {
    name: String,
    attribute: Option<String>,
    schema_name: Option<String>,
    ty: String,
    description: Option<String>,
}

impl DirectiveField {
    /// `ty` is the GraphQL type reference of the argument, e.g. `Int!` or `[String!]`.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: None,
            schema_name: None,
            ty: ty.into(),
            description: None,
        }
    }

    /// Read the value from this attribute of applied instances instead of the field name.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Render the argument under this name, bypassing the naming policy.
    #[must_use]
    pub fn with_schema_name(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute read on applied instances.
    pub fn attribute(&self) -> &str {
        self.attribute.as_deref().unwrap_or(&self.name)
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Ordered list of the arguments of a directive type.
///
/// ```
/// use graphql_schema_directives::{DirectiveField, DirectiveFields};
///
/// let fields = DirectiveFields::new()
///     .field("max_age", "Int")
///     .push(DirectiveField::new("scope", "CacheControlScope").with_schema_name("cacheScope"));
///
/// assert_eq!(fields.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveFields(Vec<DirectiveField>);

impl DirectiveFields {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push(DirectiveField::new(name, ty))
    }

    #[must_use]
    pub fn push(mut self, field: DirectiveField) -> Self {
        self.0.push(field);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectiveField> {
        self.0.iter()
    }
}

impl From<Vec<DirectiveField>> for DirectiveFields {
    fn from(fields: Vec<DirectiveField>) -> Self {
        Self(fields)
    }
}

impl From<DirectiveFields> for Vec<DirectiveField> {
    fn from(fields: DirectiveFields) -> Self {
        fields.0
    }
}

impl FromIterator<DirectiveField> for DirectiveFields {
    fn from_iter<T: IntoIterator<Item = DirectiveField>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DirectiveFields {
    type Item = DirectiveField;
    type IntoIter = std::vec::IntoIter<DirectiveField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DirectiveFields {
    type Item = &'a DirectiveField;
    type IntoIter = std::slice::Iter<'a, DirectiveField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_falls_back_to_name() {
        let field = DirectiveField::new("max_age", "Int");
        assert_eq!(field.attribute(), "max_age");

        let field = field.with_attribute("age");
        assert_eq!(field.attribute(), "age");
        assert_eq!(field.name(), "max_age");
    }

    #[test]
    fn builder_preserves_declaration_order() {
        let fields = DirectiveFields::new()
            .field("c", "Int")
            .field("a", "String")
            .field("b", "Boolean!");

        let names = fields.iter().map(DirectiveField::name).collect::<Vec<_>>();

        assert_eq!(names, ["c", "a", "b"]);
    }
}
