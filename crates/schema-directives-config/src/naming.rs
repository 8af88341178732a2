#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Convert declared names to lowerCamelCase when no explicit schema name is given.
    /// Enabled by default.
    pub auto_camel_case: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self { auto_camel_case: true }
    }
}
