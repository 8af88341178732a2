#![allow(unused_crate_dependencies)]

use graphql_schema_directives::{
    schema_directive, ArgumentValue, AttributeMap, DirectiveFields, DirectiveRegistry, DirectiveType, ExtractionError,
    Location, NameConverter,
};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(serde::Serialize)]
struct Sample {
    #[serde(skip_serializing_if = "Option::is_none")]
    a: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<String>,
}

impl DirectiveType for Sample {
    const NAME: &'static str = "Sample";

    fn fields() -> DirectiveFields {
        DirectiveFields::new().field("a", "Int").field("b", "String")
    }
}

#[derive(serde::Serialize)]
struct CacheControl {
    max_age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inherit_max_age: Option<bool>,
}

impl DirectiveType for CacheControl {
    const NAME: &'static str = "CacheControl";

    fn fields() -> DirectiveFields {
        DirectiveFields::new()
            .field("max_age", "Int")
            .field("inherit_max_age", "Boolean")
    }
}

#[derive(serde::Serialize)]
struct Internal;

impl DirectiveType for Internal {
    const NAME: &'static str = "Internal";

    fn fields() -> DirectiveFields {
        DirectiveFields::new()
    }
}

#[derive(serde::Serialize)]
struct Tag(String);

impl DirectiveType for Tag {
    const NAME: &'static str = "Tag";

    fn fields() -> DirectiveFields {
        DirectiveFields::new().field("name", "String!")
    }
}

#[derive(serde::Serialize)]
struct Deprecated;

impl DirectiveType for Deprecated {
    const NAME: &'static str = "Deprecated";

    fn fields() -> DirectiveFields {
        DirectiveFields::new().field("reason", "String")
    }
}

fn registry() -> DirectiveRegistry {
    let mut registry = DirectiveRegistry::default();

    schema_directive([Location::Object]).declare::<Sample>(&mut registry).unwrap();
    schema_directive([Location::Object, Location::FieldDefinition])
        .declare::<CacheControl>(&mut registry)
        .unwrap();
    schema_directive([Location::Object])
        .print_definition(false)
        .declare::<Internal>(&mut registry)
        .unwrap();
    schema_directive([Location::FieldDefinition])
        .declare::<Tag>(&mut registry)
        .unwrap();
    schema_directive([Location::FieldDefinition])
        .declare::<Deprecated>(&mut registry)
        .unwrap();

    registry
}

#[test]
fn unset_fields_round_trip() {
    let values = registry()
        .applied_values(&Sample { a: Some(5), b: None })
        .unwrap();

    let expected: IndexMap<String, ArgumentValue> = [
        ("a".to_owned(), ArgumentValue::Provided(json!(5))),
        ("b".to_owned(), ArgumentValue::Unset),
    ]
    .into_iter()
    .collect();

    assert_eq!(values, expected);
}

#[test]
fn keys_are_schema_names_of_every_field() {
    let registry = registry();

    let values = registry
        .applied_values(&CacheControl {
            max_age: None,
            inherit_max_age: None,
        })
        .unwrap();

    let keys = values.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, ["maxAge", "inheritMaxAge"]);

    // `max_age` was serialized as null, `inherit_max_age` was skipped.
    assert_eq!(values["maxAge"], ArgumentValue::ExplicitNull);
    assert_eq!(values["inheritMaxAge"], ArgumentValue::Unset);
}

#[test]
fn unset_is_distinct_from_empty_and_null() {
    let definition = registry().get::<Sample>().unwrap().clone();

    let applied = AttributeMap::new().with("a", None::<i32>).with("b", json!(""));
    let values = definition
        .get_applied_values(&applied, &NameConverter::default())
        .unwrap();

    assert_eq!(values["a"], ArgumentValue::ExplicitNull);
    assert_eq!(values["b"], ArgumentValue::Provided(json!("")));

    let values = definition
        .get_applied_values(&AttributeMap::new(), &NameConverter::default())
        .unwrap();

    assert!(values.values().all(ArgumentValue::is_unset));
}

#[test]
fn directive_without_fields_has_no_values() {
    let values = registry().applied_values(&Internal).unwrap();

    assert!(values.is_empty());
}

#[test]
fn directives_must_serialize_to_objects() {
    let registry = registry();

    let error = registry.applied_values(&Tag("public".into())).unwrap_err();
    insta::assert_snapshot!(error, @"Directive type `applied_values::Tag` must serialize to an object to read its arguments");

    // Null only stands for "no arguments" when the directive declares none.
    let error = registry.applied_values(&Deprecated).unwrap_err();
    assert!(matches!(error, ExtractionError::NotAnObject { .. }));
}

#[test]
fn naming_policy_of_the_context_is_used() {
    let registry = registry();
    let definition = registry.get::<CacheControl>().unwrap();

    let applied = AttributeMap::new().with("max_age", json!(30));
    let values = definition
        .get_applied_values(&applied, &NameConverter::new(false))
        .unwrap();

    insta::assert_debug_snapshot!(values, @r###"
    {
        "max_age": Provided(
            Number(30),
        ),
        "inherit_max_age": Unset,
    }
    "###);
}

#[test]
fn undeclared_types_are_reported() {
    let error = DirectiveRegistry::default()
        .applied_values(&Sample { a: None, b: None })
        .unwrap_err();

    assert!(matches!(error, ExtractionError::NotDeclared { .. }));
}

#[test]
fn printable_declarations() {
    let registry = registry();

    let printable = registry.printable().map(|(name, _)| name).collect::<Vec<_>>();

    assert_eq!(printable, ["sample", "cacheControl", "tag", "deprecated"]);
}
