#![cfg(feature = "record")]
//! Integration tests for the Record Evaluator.

use rstest::{fixture, rstest};
use shapewright::prelude::*;
use shapewright::{record, sequence};

#[fixture]
fn todo() -> Record {
    record! {
        "title" => Shape::Primitive(Primitive::String),
        "description" => Shape::Primitive(Primitive::String),
        "completed" => Shape::Primitive(Primitive::Boolean),
    }
}

fn keys_of(record: &Record) -> Vec<&str> {
    record.keys().map(Text::as_str).collect()
}

// =============================================================================
// Projections
// =============================================================================

#[rstest]
fn test_pick_two_of_three() {
    let input = record! { "a" => 1, "b" => 2, "c" => 3 };
    assert_eq!(record::pick(&input, &["a", "c"]), record! { "a" => 1, "c" => 3 });
}

#[rstest]
fn test_pick_single_key(todo: Record) {
    assert_eq!(
        record::pick(&todo, &["title"]),
        record! { "title" => Shape::Primitive(Primitive::String) }
    );
}

#[rstest]
fn test_pick_nothing_is_empty(todo: Record) {
    assert!(record::pick(&todo, &[]).is_empty());
}

#[rstest]
fn test_omit_single_key(todo: Record) {
    assert_eq!(
        keys_of(&record::omit(&todo, &["description"])),
        vec!["title", "completed"]
    );
}

#[rstest]
fn test_omit_unknown_key_is_identity(todo: Record) {
    assert_eq!(record::omit(&todo, &["invalid"]), todo);
}

#[rstest]
fn test_pick_and_omit_partition_the_fields(todo: Record) {
    let picked = record::pick(&todo, &["title"]);
    let omitted = record::omit(&todo, &["title"]);
    assert_eq!(record::merge(&picked, &omitted), todo);
    assert_eq!(record::diff(&picked, &omitted), todo);
}

#[rstest]
fn test_pick_by_type_and_omit_by_type() {
    let model = record! {
        "name" => Shape::Primitive(Primitive::String),
        "count" => Shape::Primitive(Primitive::Number),
        "isReadonly" => Shape::Primitive(Primitive::Boolean),
        "isEnable" => Shape::Primitive(Primitive::Boolean),
    };
    let boolean = Shape::Primitive(Primitive::Boolean);
    assert_eq!(
        keys_of(&record::pick_by_type(&model, &boolean)),
        vec!["isReadonly", "isEnable"]
    );
    assert_eq!(
        keys_of(&record::omit_by_type(&model, &boolean)),
        vec!["name", "count"]
    );
    let string_or_number = Shape::union([
        Shape::Primitive(Primitive::String),
        Shape::Primitive(Primitive::Number),
    ]);
    assert_eq!(
        keys_of(&record::pick_by_type(&model, &string_or_number)),
        vec!["name", "count"]
    );
}

// =============================================================================
// Modifiers
// =============================================================================

#[rstest]
fn test_partial_by_keys_selected_fields(todo: Record) {
    let partial = record::partial_by_keys(&todo, Some(["title", "completed"].as_slice()));
    let optional: Vec<&str> = partial
        .iter()
        .filter(|field| field.is_optional())
        .map(|field| field.key().as_str())
        .collect();
    assert_eq!(optional, vec!["title", "completed"]);
    assert_eq!(keys_of(&partial), keys_of(&todo));
}

#[rstest]
fn test_partial_then_required_restores(todo: Record) {
    let partial = record::partial_by_keys(&todo, None);
    assert_ne!(partial, todo);
    assert_eq!(record::required_by_keys(&partial, None), todo);
}

#[rstest]
fn test_required_by_keys_keeps_unselected_optional(todo: Record) {
    let partial = record::partial_by_keys(&todo, None);
    let required = record::required_by_keys(&partial, Some(["title"].as_slice()));
    assert!(required.field("title").is_some_and(|field| !field.is_optional()));
    assert!(required.field("completed").is_some_and(Field::is_optional));
}

#[rstest]
fn test_readonly_and_mutable(todo: Record) {
    let frozen = record::readonly(&todo);
    assert!(frozen.iter().all(Field::is_readonly));
    assert_eq!(record::mutable(&frozen), todo);
}

#[rstest]
fn test_readonly_by_keys_leaves_other_fields(todo: Record) {
    let frozen = record::readonly_by_keys(&todo, Some(["title", "description"].as_slice()));
    assert!(frozen.field("completed").is_some_and(|field| !field.is_readonly()));
    assert!(frozen.field("title").is_some_and(Field::is_readonly));
}

#[rstest]
fn test_deep_readonly_through_arrays() {
    let shape = Shape::from(record! {
        "items" => Shape::array(Shape::from(record! { "id" => 1 })),
    });
    let frozen = record::deep_readonly(&shape);
    let expected = Shape::Record(Record::from_fields([Field::new(
        "items",
        Shape::array(Shape::Record(Record::from_fields([
            Field::new("id", 1).with_modifiers(Modifiers::READONLY),
        ]))),
    )
    .with_modifiers(Modifiers::READONLY)]));
    assert_eq!(frozen, expected);
}

// =============================================================================
// Combinations
// =============================================================================

#[rstest]
fn test_merge_second_wins() {
    let foo = record! { "name" => "x", "age" => "y" };
    let bar = record! { "age" => 1, "sex" => "z" };
    let merged = record::merge(&foo, &bar);
    assert_eq!(merged, record! { "name" => "x", "age" => 1, "sex" => "z" });
    assert_eq!(keys_of(&merged), vec!["name", "age", "sex"]);
}

#[rstest]
fn test_diff_is_symmetric_in_keys() {
    let foo = record! { "name" => "x", "age" => "y" };
    let bar = record! { "name" => "x", "age" => "y", "gender" => 1 };
    assert_eq!(record::diff(&foo, &bar), record! { "gender" => 1 });
    assert_eq!(record::diff(&bar, &foo), record! { "gender" => 1 });
}

#[rstest]
fn test_append_field_overrides() {
    let test = record! { "key" => "cat", "value" => "green" };
    assert_eq!(
        record::append_field(&test, "home", Shape::from(true)),
        record! { "key" => "cat", "value" => "green", "home" => true }
    );
    assert_eq!(
        record::append_field(&test, "value", Shape::from(4)),
        record! { "key" => "cat", "value" => 4 }
    );
}

#[rstest]
fn test_flip_stringifies_values() {
    let flipped = record::flip(&record! { "pi" => "a", "bool" => false, "prop" => 3 });
    assert_eq!(
        flipped,
        Ok(record! { "a" => "pi", "false" => "bool", "3" => "prop" })
    );
}

#[rstest]
fn test_flip_rejects_non_literal_values(todo: Record) {
    assert_eq!(
        record::flip(&todo),
        Err(ShapeError::InvalidKey {
            found: ShapeKind::Primitive
        })
    );
}

#[rstest]
fn test_flip_twice_restores_string_records() {
    let original = record! { "a" => "x", "b" => "y" };
    let flipped = record::flip(&original).and_then(|flipped| record::flip(&flipped));
    assert_eq!(flipped, Ok(original));
}

// =============================================================================
// Shape-level operations
// =============================================================================

#[rstest]
fn test_object_entries_of_model() {
    let model = record! {
        "name" => Shape::Primitive(Primitive::String),
        "age" => Shape::Primitive(Primitive::Number),
        "locations" => Shape::union([Shape::array(Shape::Primitive(Primitive::String)), Shape::Null]),
    };
    assert_eq!(
        record::object_entries(&model),
        Shape::union([
            Shape::from(sequence!["name", Shape::Primitive(Primitive::String)]),
            Shape::from(sequence!["age", Shape::Primitive(Primitive::Number)]),
            Shape::from(sequence![
                "locations",
                Shape::union([Shape::array(Shape::Primitive(Primitive::String)), Shape::Null])
            ]),
        ])
    );
}

#[rstest]
fn test_look_up_by_tag() {
    let cat = Shape::from(record! { "type" => "cat", "breeds" => "Abyssinian" });
    let dog = Shape::from(record! { "type" => "dog", "breeds" => "Hound", "color" => "brown" });
    let animals = Shape::union([cat.clone(), dog.clone()]);
    assert_eq!(record::look_up(&animals, &Shape::from("dog")), dog);
    assert_eq!(record::look_up(&animals, &Shape::from("cat")), cat);
    assert_eq!(
        record::look_up(&animals, &Shape::Primitive(Primitive::String)),
        animals
    );
}

#[rstest]
fn test_replace_keys_without_replacement_yields_never() {
    let node = Shape::from(record! { "type" => "A", "name" => "N", "flag" => true });
    let replaced = record::replace_keys(&node, &["name", "flag"], &record! { "name" => 1 });
    assert_eq!(
        replaced,
        Shape::from(record! { "type" => "A", "name" => 1, "flag" => Shape::Never })
    );
}

#[cfg(feature = "sequence")]
#[rstest]
fn test_map_records_with_partial() {
    let rows = sequence![record! { "a" => 1 }, "untouched"];
    let mapped = sequence::map_records(&rows, |row| record::partial_by_keys(row, None));
    assert_eq!(mapped.get(1), Some(&Shape::from("untouched")));
    assert!(mapped
        .first()
        .and_then(Shape::as_record)
        .is_some_and(|row| row.iter().all(Field::is_optional)));
}

// =============================================================================
// Chainable
// =============================================================================

#[rstest]
fn test_chainable_collects_options() {
    let config = record::Chainable::new()
        .option("foo", 123)
        .option("bar", record! { "value" => "Hello World" })
        .option("name", "type-challenges");
    assert_eq!(
        Record::from(config),
        record! {
            "foo" => 123,
            "bar" => record! { "value" => "Hello World" },
            "name" => "type-challenges",
        }
    );
}

#[rstest]
fn test_chainable_redefinition_replaces_value_and_position() {
    let config = record::Chainable::new()
        .option("name", "another name")
        .option("value", 1)
        .option("name", 123);
    assert_eq!(keys_of(config.get()), vec!["value", "name"]);
    assert_eq!(config.get().get("name"), Some(&Shape::from(123)));
}

#[rstest]
fn test_empty_chainable_is_empty_record() {
    assert!(record::Chainable::new().get().is_empty());
}
