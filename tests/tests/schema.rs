use quarry::{Field, Table, TableRef};
use tests::prelude::*;

use pretty_assertions::assert_eq;

#[test]
fn record_to_undeclared_table_fails_at_build() {
    let post = assert_ok!(Table::new(
        "Post",
        [("author", Field::record([TableRef::deferred("Usr")]))],
    ));

    let mut test = DbTest::new();
    let err = assert_err!(test.try_setup_db(tables!(post)));

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: field `Post.author` references unknown table `Usr`"
    );
}

#[test]
fn tables_declared_twice_are_rejected() {
    let a = assert_ok!(Table::new("User", [("name", Field::string())]));
    let b = assert_ok!(Table::new("User", [("email", Field::string())]));

    let mut test = DbTest::new();
    let err = assert_err!(test.try_setup_db(tables!(a, b)));
    assert!(err.is_invalid_schema());
}

#[test]
fn unnamed_table_is_rejected() {
    let table = assert_ok!(Table::new("", [("name", Field::string())]));

    let mut test = DbTest::new();
    let err = assert_err!(test.try_setup_db(tables!(table)));
    assert!(err.is_unset_name());
}

#[test]
fn schema_is_inspectable() {
    let user = assert_ok!(Table::new(
        "User",
        [("name", Field::string()), ("age", Field::int().optional())],
    ));

    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user));

    let users = assert_ok!(db.table("User"));
    assert_eq!(users.name(), "User");
    assert_eq!(
        users.schema().field_names().collect::<Vec<_>>(),
        ["name", "age"]
    );
    assert_eq!(db.schema().tables().len(), 1);

    let age = assert_some!(users.schema().field("age"));
    assert_eq!(age.owner(), Some("User"));
    assert!(!age.is_required());
}
