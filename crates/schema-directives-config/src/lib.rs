mod directive;
mod naming;
mod redeclaration;

pub use directive::{DirectiveConfig, DirectiveLocation};
pub use naming::NamingConfig;
pub use redeclaration::RedeclarationPolicy;

/// Settings shared by every directive declared in a registry.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaDirectivesConfig {
    /// How schema-visible names are derived from declared names.
    pub naming: NamingConfig,
    /// What happens when the same directive type is declared twice.
    pub redeclaration: RedeclarationPolicy,
}
