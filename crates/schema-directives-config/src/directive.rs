/// Options of a directive declared from configuration.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectiveConfig {
    /// Overrides the name rendered in the schema.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Where the directive may be applied. Must not be empty.
    pub locations: Vec<DirectiveLocation>,
    pub repeatable: bool,
    /// Whether the directive definition is rendered in the schema text.
    /// Enabled by default.
    pub print_definition: bool,
}

impl Default for DirectiveConfig {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            locations: Vec::new(),
            repeatable: false,
            print_definition: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
