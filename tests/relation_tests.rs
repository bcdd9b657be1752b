//! Integration tests for the shape relations.

use rstest::rstest;
use shapewright::prelude::*;
use shapewright::{record, sequence};

fn number() -> Shape {
    Shape::Primitive(Primitive::Number)
}

fn string() -> Shape {
    Shape::Primitive(Primitive::String)
}

// =============================================================================
// Strict equality
// =============================================================================

#[rstest]
#[case(Shape::Any, Shape::Any, true)]
#[case(Shape::Any, Shape::Unknown, false)]
#[case(Shape::Never, Shape::Never, true)]
#[case(Shape::Null, Shape::Undefined, false)]
#[case(Shape::from(1), Shape::from(1), true)]
#[case(Shape::from(1), number(), false)]
#[case(Shape::from(sequence![1]), Shape::from(sequence![1, 2]), false)]
#[case(Shape::from(sequence![]), Shape::array(Shape::Never), false)]
#[case(
    Shape::union([Shape::from(1), Shape::from("a")]),
    Shape::union([Shape::from("a"), Shape::from(1)]),
    true
)]
#[case(
    Shape::from(record! { "a" => 1, "b" => 2 }),
    Shape::from(record! { "b" => 2, "a" => 1 }),
    true
)]
fn test_is_equal(#[case] left: Shape, #[case] right: Shape, #[case] expected: bool) {
    assert_eq!(relation::is_equal(&left, &right), expected);
    assert_eq!(relation::is_equal(&right, &left), expected);
}

#[rstest]
fn test_is_equal_distinguishes_optional_fields() {
    let required = Record::from_fields([Field::new("a", 1)]);
    let optional = Record::from_fields([Field::new("a", 1).with_modifiers(Modifiers::OPTIONAL)]);
    assert!(!relation::is_equal(&Shape::from(required), &Shape::from(optional)));
}

// =============================================================================
// Assignability
// =============================================================================

#[rstest]
#[case(Shape::from(sequence![1, 2]), Shape::array(number()), true)]
#[case(Shape::from(sequence![1, "a"]), Shape::array(number()), false)]
#[case(Shape::array(number()), Shape::from(sequence![1]), false)]
#[case(Shape::from(sequence![1]), Shape::from(sequence![number()]), true)]
#[case(Shape::from(sequence![1]), Shape::from(sequence![number(), number()]), false)]
#[case(Shape::from(record! {}), Shape::Primitive(Primitive::Object), true)]
#[case(Shape::from(1), Shape::Primitive(Primitive::Object), false)]
#[case(Shape::promise(Shape::from(1)), Shape::promise(number()), true)]
#[case(Shape::union([Shape::from("a"), Shape::from("b")]), string(), true)]
#[case(string(), Shape::union([string(), number()]), true)]
#[case(Shape::Any, Shape::Never, false)]
#[case(Shape::Never, Shape::Never, true)]
fn test_is_assignable(#[case] source: Shape, #[case] target: Shape, #[case] expected: bool) {
    assert_eq!(relation::is_assignable(&source, &target), expected);
}

#[rstest]
fn test_optional_target_fields_may_be_missing() {
    let target = Shape::from(Record::from_fields([
        Field::new("a", number()),
        Field::new("b", string()).with_modifiers(Modifiers::OPTIONAL),
    ]));
    assert!(relation::is_assignable(&Shape::from(record! { "a" => 1 }), &target));
    assert!(relation::is_assignable(
        &Shape::from(record! { "a" => 1, "b" => "x" }),
        &target
    ));
    assert!(!relation::is_assignable(
        &Shape::from(record! { "a" => 1, "b" => 2 }),
        &target
    ));
}

#[rstest]
fn test_optional_source_field_does_not_fit_required_target() {
    let source = Shape::from(Record::from_fields([
        Field::new("a", 1).with_modifiers(Modifiers::OPTIONAL),
    ]));
    assert!(!relation::is_assignable(&source, &Shape::from(record! { "a" => number() })));
}

#[rstest]
fn test_function_parameters_are_contravariant() {
    let takes_number = Shape::from(Function::new(sequence![number()], Shape::Void));
    let takes_one = Shape::from(Function::new(sequence![1], Shape::Void));
    assert!(relation::is_assignable(&takes_number, &takes_one));
    assert!(!relation::is_assignable(&takes_one, &takes_number));
}

#[rstest]
fn test_fewer_parameters_fit_more() {
    let unary = Shape::from(Function::new(sequence![number()], string()));
    let binary = Shape::from(Function::new(sequence![number(), number()], string()));
    assert!(relation::is_assignable(&unary, &binary));
    assert!(!relation::is_assignable(&binary, &unary));
}

// =============================================================================
// exclude / is_never / is_union
// =============================================================================

#[rstest]
fn test_exclude_by_primitive() {
    let mixed = Shape::union([Shape::from("a"), Shape::from(1), Shape::from(true)]);
    assert_eq!(
        relation::exclude(&mixed, &string()),
        Shape::union([Shape::from(1), Shape::from(true)])
    );
    assert_eq!(relation::exclude(&mixed, &Shape::Unknown), Shape::Never);
}

#[rstest]
fn test_exclude_never_is_identity() {
    let shape = Shape::union([Shape::from("a"), Shape::Null]);
    assert_eq!(relation::exclude(&shape, &Shape::Never), shape);
    assert_eq!(relation::exclude(&Shape::Never, &Shape::Null), Shape::Never);
}

#[rstest]
#[case(Shape::Undefined)]
#[case(Shape::Any)]
#[case(Shape::Unknown)]
#[case(Shape::Primitive(Primitive::String))]
fn test_exclude_keeps_any(#[case] excluded: Shape) {
    assert_eq!(relation::exclude(&Shape::Any, &excluded), Shape::Any);
}

#[rstest]
fn test_exclude_keeps_any_inside_a_union() {
    let shape = Shape::union([Shape::Any, Shape::Undefined]);
    assert_eq!(relation::exclude(&shape, &Shape::Undefined), Shape::Any);
}

#[rstest]
#[case(Shape::Never, true, false)]
#[case(Shape::Null, false, false)]
#[case(Shape::union([Shape::Null, Shape::Undefined]), false, true)]
#[case(Shape::union([Shape::Null, Shape::Null]), false, false)]
#[case(Shape::union([]), true, false)]
fn test_is_never_and_is_union(
    #[case] shape: Shape,
    #[case] never: bool,
    #[case] union: bool,
) {
    assert_eq!(relation::is_never(&shape), never);
    assert_eq!(relation::is_union(&shape), union);
}

// =============================================================================
// if_else
// =============================================================================

#[rstest]
#[case(Shape::from(true), Shape::from("a"))]
#[case(Shape::from(false), Shape::from(2))]
#[case(Shape::Primitive(Primitive::Boolean), Shape::union([Shape::from("a"), Shape::from(2)]))]
#[case(Shape::Any, Shape::union([Shape::from("a"), Shape::from(2)]))]
#[case(Shape::Never, Shape::Never)]
fn test_if_else(#[case] condition: Shape, #[case] expected: Shape) {
    assert_eq!(
        relation::if_else(&condition, Shape::from("a"), Shape::from(2)),
        Ok(expected)
    );
}

#[rstest]
fn test_if_else_rejects_non_boolean_condition() {
    assert_eq!(
        relation::if_else(&Shape::Null, Shape::from("a"), Shape::from(2)),
        Err(ShapeError::KindMismatch {
            expected: ShapeKind::Primitive,
            found: ShapeKind::Null,
        })
    );
}
