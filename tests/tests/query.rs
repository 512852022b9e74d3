use quarry::{
    Direction, ExecOptions, Field, Filter, Projection, Select, Table, Value,
};
use tests::prelude::*;

use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

fn user() -> Table {
    assert_ok!(Table::new(
        "User",
        [
            ("name", Field::string()),
            ("age", Field::int().optional()),
            ("tags", Field::string().array()),
        ],
    ))
}

fn ann() -> Value {
    Value::object_from_iter([("name", Value::from("Ann")), ("age", Value::from(30))])
}

#[tokio::test]
async fn find_many_with_or_filter_order_and_limit() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    test.script().respond(vec![ann()]);

    let users = assert_ok!(db.table("User"));
    let query = Select::new()
        .filter(Filter::any([
            Filter::eq("name", "Ann"),
            Filter::eq("name", "Bo"),
        ]))
        .limit(10)
        .order_by("age", Direction::Asc);

    let rows = assert_ok!(users.find_many(query).await);
    assert_eq!(rows, [ann()]);

    let (sql, bindings) = assert_some!(test.log().pop());
    assert_eq!(
        sql,
        "SELECT * FROM User WHERE ((name = $name_1) OR (name = $name_2)) ORDER BY age asc LIMIT 10;"
    );
    assert_eq!(bindings.get("name_1"), Some(&Value::from("Ann")));
    assert_eq!(bindings.get("name_2"), Some(&Value::from("Bo")));
}

#[tokio::test]
async fn find_many_takes_the_first_result_set() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    test.script().respond_with(quarry::Response::new(vec![
        vec![ann()],
        vec![Value::from("ignored")],
    ]));

    let rows = assert_ok!(assert_ok!(db.table("User")).find_many(Select::new()).await);
    assert_eq!(rows, [ann()]);
}

#[tokio::test]
async fn find_many_without_result_sets_is_invalid() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    test.script().respond_with(quarry::Response::default());

    let err = assert_err!(assert_ok!(db.table("User")).find_many(Select::new()).await);
    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn find_first_limits_to_one() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    test.script().respond(vec![ann()]);

    let users = assert_ok!(db.table("User"));
    let first = assert_ok!(users.find_first(Select::new().filter(Filter::eq("age", 30))).await);
    assert_eq!(first, Some(ann()));

    let none = assert_ok!(users.find_first(Select::new()).await);
    assert_eq!(none, None);

    assert_eq!(
        test.log().statements(),
        [
            "SELECT * FROM User WHERE (age = $age_1) LIMIT 1;",
            "SELECT * FROM User LIMIT 1;",
        ]
    );
}

#[tokio::test]
async fn filter_from_json() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));

    let filter = assert_ok!(Filter::from_json(&json!({ "OR": [{ "name": "Ann" }, { "age": 30 }] })));
    let (sql, bindings) = assert_ok!(assert_ok!(db.table("User")).compile_select(Select::new().filter(filter)));

    assert_eq!(
        sql,
        "SELECT * FROM User WHERE ((name = $name_1) OR (age = $age_2));"
    );
    assert_eq!(bindings.get("age_2"), Some(&Value::I64(30)));
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn projection_from_flags() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    let users = assert_ok!(db.table("User"));

    let include = Select::new().projection(Projection::from_flags([("name", true), ("age", false)]));
    let omit = Select::new().projection(Projection::from_flags([("tags", false)]));

    assert_eq!(
        assert_ok!(users.compile_select(include)).0,
        "SELECT name FROM User;"
    );
    assert_eq!(
        assert_ok!(users.compile_select(omit)).0,
        "SELECT * OMIT tags FROM User;"
    );
}

#[tokio::test]
async fn empty_projection_lists() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    let users = assert_ok!(db.table("User"));

    let err = assert_err!(users.find_many(Select::new().include(Vec::<String>::new())).await);
    assert!(err.is_invalid_statement());
    assert!(test.log().is_empty());

    assert_eq!(
        assert_ok!(users.compile_select(Select::new().omit(Vec::<String>::new()))).0,
        "SELECT * FROM User;"
    );
}

#[tokio::test]
async fn default_options_fill_unset_options() {
    let mut builder = tables!(user());
    builder.default_options(
        ExecOptions::default()
            .timeout(Duration::from_millis(500))
            .parallel(true),
    );

    let mut test = DbTest::new();
    let db = test.setup_db(builder);
    let users = assert_ok!(db.table("User"));

    let (sql, _) = assert_ok!(users.compile_select(Select::new()));
    assert_eq!(sql, "SELECT * FROM User PARALLEL TIMEOUT 500ms;");

    let (sql, _) = assert_ok!(users.compile_select(Select::new().timeout(Duration::from_secs(3))));
    assert_eq!(sql, "SELECT * FROM User PARALLEL TIMEOUT 3000ms;");
}

#[tokio::test]
async fn unknown_fields_fail_locally() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    let users = assert_ok!(db.table("User"));

    let err = assert_err!(users.find_many(Select::new().filter(Filter::eq("nmae", "Ann"))).await);
    assert!(err.is_invalid_statement());

    let err = assert_err!(users.compile_select(Select::new().order_by("nmae", Direction::Desc)));
    assert!(err.is_invalid_statement());

    let err = assert_err!(users.compile_select(Select::new().include(["nmae"])));
    assert!(err.is_invalid_statement());

    assert!(test.log().is_empty());
}

#[tokio::test]
async fn filter_values_are_type_checked() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));

    let err = assert_err!(assert_ok!(db.table("User"))
        .compile_select(Select::new().filter(Filter::eq("age", "thirty"))));

    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "value for `User.age` does not match type `int` (found String)"
    );
}

#[tokio::test]
async fn id_is_always_a_known_field() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));

    let (sql, _) = assert_ok!(assert_ok!(db.table("User"))
        .compile_select(Select::new().filter(Filter::eq("id", "User:ann"))));
    assert_eq!(sql, "SELECT * FROM User WHERE (id = $id_1);");
}

#[tokio::test]
async fn driver_errors_keep_statement_and_bindings() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    test.script()
        .fail_on("SELECT", "There was a problem with the database");

    let err = assert_err!(
        assert_ok!(db.table("User"))
            .find_many(Select::new().filter(Filter::eq("name", "Ann")))
            .await
    );

    assert!(err.is_execution_failed());
    assert_eq!(err.statement(), Some("SELECT * FROM User WHERE (name = $name_1);"));
    assert_eq!(
        assert_some!(err.bindings()).get("name_1"),
        Some(&Value::from("Ann"))
    );
}

#[tokio::test]
async fn unknown_table_handle() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));

    let err = assert_err!(db.table("Post"));
    assert!(err.is_invalid_statement());
}
