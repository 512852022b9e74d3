use quarry::{func, Create, Field, Filter, RecordId, Returning, Table, TableRef, Update, Value};
use tests::prelude::*;

use pretty_assertions::assert_eq;

fn tables() -> quarry::db::Builder {
    let user = assert_ok!(Table::new(
        "User",
        [
            ("name", Field::string()),
            ("age", Field::int().optional()),
            ("created", Field::datetime().default(func::time_now())),
            ("updated", Field::datetime().value(func::time_now())),
        ],
    ));
    let post = assert_ok!(Table::new(
        "Post",
        [
            ("title", Field::string()),
            ("author", Field::record([TableRef::deferred("User")])),
        ],
    ));
    tables!(user, post)
}

#[tokio::test]
async fn update_sets_fields_and_returns() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());
    let after = Value::object_from_iter([("name", Value::from("Ann")), ("age", Value::from(31))]);
    test.script().respond(vec![after.clone()]);

    let update = Update::new()
        .set("age", 31)
        .filter(Filter::eq("name", "Ann"))
        .returning(Returning::After);
    let rows = assert_ok!(assert_ok!(db.table("User")).update(update).await);
    assert_eq!(rows, [after]);

    let (sql, bindings) = assert_some!(test.log().pop());
    assert_eq!(
        sql,
        "UPDATE User SET age = $age WHERE (name = $name_1) RETURN AFTER;"
    );
    assert_eq!(bindings.get("age"), Some(&Value::I64(31)));
    assert_eq!(bindings.get("name_1"), Some(&Value::from("Ann")));
}

#[tokio::test]
async fn empty_update_is_rejected_locally() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());

    let err = assert_err!(assert_ok!(db.table("User")).update(Update::new()).await);
    assert!(err.is_invalid_statement());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn update_checks_value_types() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());

    let err = assert_err!(assert_ok!(db.table("User")).compile_update(Update::new().set("age", "old")));
    assert!(err.is_validation());
}

#[tokio::test]
async fn create_returns_stored_record() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());

    let record = assert_ok!(
        assert_ok!(db.table("User"))
            .create(Create::new().id("ann").set("name", "Ann").set("age", 30))
            .await
    );

    assert_eq!(record.get("name"), Some(&Value::from("Ann")));
    assert_eq!(
        test.log().statements(),
        ["CREATE ONLY User:ann CONTENT { name: $name, age: $age };"]
    );
}

#[tokio::test]
async fn create_requires_fields_without_defaults() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());

    let err = assert_err!(assert_ok!(db.table("User")).create(Create::new().set("age", 30)).await);
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "missing required field `User.name`");
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn create_accepts_record_links() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());
    let posts = assert_ok!(db.table("Post"));

    let author = RecordId::new("User", "ann");
    assert_ok!(
        posts
            .create(Create::new().set("title", "Hello").set("author", author))
            .await
    );

    let err = assert_err!(posts.compile_create(
        Create::new()
            .set("title", "Hello")
            .set("author", RecordId::new("Post", 1_i64))
    ));
    assert!(err.is_validation());
}

#[tokio::test]
async fn create_with_empty_response_is_invalid() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());
    test.script().respond(vec![]);

    let err = assert_err!(
        assert_ok!(db.table("User"))
            .create(Create::new().set("name", "Ann"))
            .await
    );
    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn create_many_continues_past_failures() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());
    test.script().fail_on("User:bo ", "record already exists");

    let results = assert_ok!(db.table("User"))
        .create_many([
            Create::new().id("ann").set("name", "Ann"),
            Create::new().id("bo").set("name", "Bo"),
            Create::new().id("cy").set("name", "Cy"),
        ])
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(assert_err!(&results[1]).is_execution_failed());
    assert!(results[2].is_ok());

    let log = test.log();
    assert_eq!(log.len(), 3);
    assert_eq!(log.failures(), 1);
}

#[tokio::test]
async fn create_many_reports_local_errors_per_record() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables());

    let results = assert_ok!(db.table("User"))
        .create_many([Create::new(), Create::new().set("name", "Ann")])
        .await;

    assert!(assert_err!(&results[0]).is_validation());
    assert!(results[1].is_ok());
    assert_eq!(test.log().len(), 1);
}
