use schema_directives_config::DirectiveLocation;

/// Type system locations a schema directive can be applied to.
///
/// https://spec.graphql.org/October2021/#TypeSystemDirectiveLocation
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Location {
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

impl Location {
    /// The GraphQL name, as written after `on` in a directive definition.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Human readable name, used in diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            Location::Schema => "schema",
            Location::Scalar => "scalar",
            Location::Object => "object",
            Location::FieldDefinition => "field definition",
            Location::ArgumentDefinition => "argument definition",
            Location::Interface => "interface",
            Location::Union => "union",
            Location::Enum => "enum",
            Location::EnumValue => "enum value",
            Location::InputObject => "input object",
            Location::InputFieldDefinition => "input field definition",
        }
    }
}

impl From<DirectiveLocation> for Location {
    fn from(location: DirectiveLocation) -> Self {
        match location {
            DirectiveLocation::Schema => Location::Schema,
            DirectiveLocation::Scalar => Location::Scalar,
            DirectiveLocation::Object => Location::Object,
            DirectiveLocation::FieldDefinition => Location::FieldDefinition,
            DirectiveLocation::ArgumentDefinition => Location::ArgumentDefinition,
            DirectiveLocation::Interface => Location::Interface,
            DirectiveLocation::Union => Location::Union,
            DirectiveLocation::Enum => Location::Enum,
            DirectiveLocation::EnumValue => Location::EnumValue,
            DirectiveLocation::InputObject => Location::InputObject,
            DirectiveLocation::InputFieldDefinition => Location::InputFieldDefinition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn locations_display() {
        let all = Location::iter().map(|location| location.to_string()).collect::<Vec<_>>().join(" | ");

        let expected = "SCHEMA | SCALAR | OBJECT | FIELD_DEFINITION | ARGUMENT_DEFINITION | INTERFACE | UNION | ENUM | ENUM_VALUE | INPUT_OBJECT | INPUT_FIELD_DEFINITION";

        assert_eq!(all, expected);
    }

    #[rstest::rstest]
    #[case("OBJECT", Location::Object)]
    #[case("field_definition", Location::FieldDefinition)]
    #[case("Input_Field_Definition", Location::InputFieldDefinition)]
    #[case("ENUM_VALUE", Location::EnumValue)]
    fn location_from_str(#[case] input: &str, #[case] expected: Location) {
        assert_eq!(Location::from_str(input), Ok(expected));
    }

    #[test]
    fn executable_locations_are_not_type_system_locations() {
        assert!(Location::from_str("QUERY").is_err());
        assert!(Location::from_str("FRAGMENT_SPREAD").is_err());
    }

    #[test]
    fn every_location_has_a_distinct_description() {
        let mut descriptions = Location::iter().map(Location::description).collect::<Vec<_>>();
        descriptions.sort_unstable();
        descriptions.dedup();

        assert_eq!(descriptions.len(), Location::iter().count());
        assert_eq!(Location::InputFieldDefinition.description(), "input field definition");
    }

    #[test]
    fn serde_uses_graphql_names() {
        let locations: Vec<Location> = serde_json::from_str(r#"["ARGUMENT_DEFINITION", "UNION"]"#).unwrap();

        assert_eq!(locations, [Location::ArgumentDefinition, Location::Union]);
        assert_eq!(serde_json::to_string(&Location::EnumValue).unwrap(), r#""ENUM_VALUE""#);
    }

    #[test]
    fn config_locations_convert() {
        assert_eq!(Location::from(DirectiveLocation::InputObject), Location::InputObject);
        assert_eq!(Location::from(DirectiveLocation::Schema).as_str(), "SCHEMA");
    }
}
