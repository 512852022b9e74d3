use quarry::{Expression, Field, Table, TableRef};
use tests::prelude::*;

use pretty_assertions::assert_eq;

fn user() -> Table {
    assert_ok!(Table::new(
        "User",
        [("name", Field::string()), ("age", Field::int().optional())],
    ))
}

#[tokio::test]
async fn deploy_defines_table_then_fields() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));

    assert_ok!(assert_ok!(db.table("User")).deploy().await);

    let log = test.log();
    assert_eq!(log.count_prefix("DEFINE TABLE User "), 1);
    assert_eq!(log.count_prefix("DEFINE FIELD "), 2);
    assert_eq!(
        log.statements(),
        [
            "DEFINE TABLE User SCHEMAFULL PERMISSIONS NONE;",
            "DEFINE FIELD name ON User TYPE string;",
            "DEFINE FIELD age ON User TYPE option<int>;",
        ]
    );
}

#[tokio::test]
async fn unique_fields_get_a_separate_index_statement() {
    let mut test = DbTest::new();
    let table = assert_ok!(Table::new("User", [("email", Field::string().unique())]));
    let db = test.setup_db(tables!(table));

    assert_ok!(assert_ok!(db.table("User")).deploy().await);

    let mut log = test.log();
    assert_eq!(log.len(), 3);
    log.pop();
    assert_eq!(
        log.statements(),
        [
            "DEFINE FIELD email ON User TYPE string;",
            "DEFINE INDEX email_UNIQUE ON User FIELDS email UNIQUE;",
        ]
    );
}

#[tokio::test]
async fn failed_field_is_a_partial_deployment() {
    let mut test = DbTest::new();
    let table = assert_ok!(Table::new(
        "User",
        [
            ("name", Field::string()),
            ("age", Field::int()),
            ("email", Field::string()),
        ],
    ));
    let db = test.setup_db(tables!(table));
    test.script()
        .fail_on("DEFINE FIELD age", "field already exists");

    let err = assert_err!(assert_ok!(db.table("User")).deploy().await);

    assert!(err.is_partial_deployment());
    assert!(!err.is_local());
    assert_eq!(err.failed_field(), Some("age"));
    assert_eq!(err.statement_index(), Some(2));
    assert_eq!(err.statement(), Some("DEFINE FIELD age ON User TYPE int;"));
    assert!(err.root().is_driver_operation_failed());
    assert_eq!(
        err.to_string(),
        "deployment of table `User` stopped at statement 2 (field `age`): \
         failed to execute `DEFINE FIELD age ON User TYPE int;`: field already exists"
    );

    // Statements before the failure stay applied; nothing after it is sent
    let log = test.log();
    assert_eq!(log.len(), 3);
    assert_eq!(log.failures(), 1);
}

#[tokio::test]
async fn failed_table_definition_names_no_field() {
    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user()));
    test.script().fail_on("DEFINE TABLE", "permission denied");

    let err = assert_err!(assert_ok!(db.table("User")).deploy().await);

    assert!(err.is_partial_deployment());
    assert_eq!(err.failed_field(), None);
    assert_eq!(err.statement_index(), Some(0));
    assert_eq!(test.log().len(), 1);
}

#[tokio::test]
async fn local_errors_send_nothing() {
    let mut test = DbTest::new();
    let table = assert_ok!(Table::new(
        "User",
        [
            ("name", Field::string()),
            ("age", Field::int().assert(Expression::new())),
        ],
    ));
    let db = test.setup_db(tables!(table));

    let err = assert_err!(assert_ok!(db.table("User")).deploy().await);

    assert!(err.is_unbound_expression());
    assert!(err.is_local());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn mutually_referencing_tables_deploy() {
    let post = assert_ok!(Table::new(
        "Post",
        [
            ("title", Field::string()),
            ("author", Field::record([TableRef::deferred("User")])),
        ],
    ));
    let user = assert_ok!(Table::new(
        "User",
        [("posts", Field::record([TableRef::deferred("Post")]).array())],
    ));

    let mut test = DbTest::new();
    let db = test.setup_db(tables!(post, user));

    assert_ok!(db.deploy().await);

    assert_eq!(
        test.log().statements(),
        [
            "DEFINE TABLE Post SCHEMAFULL PERMISSIONS NONE;",
            "DEFINE FIELD title ON Post TYPE string;",
            "DEFINE FIELD author ON Post TYPE record<User>;",
            "DEFINE TABLE User SCHEMAFULL PERMISSIONS NONE;",
            "DEFINE FIELD posts ON User TYPE array<record<Post>>;",
        ]
    );
}

#[tokio::test]
async fn deploy_stops_at_first_failed_table() {
    let post = assert_ok!(Table::new("Post", [("title", Field::string())]));

    let mut test = DbTest::new();
    let db = test.setup_db(tables!(user(), post));
    test.script().fail_on("ON User", "boom");

    let err = assert_err!(db.deploy().await);

    assert!(err.is_partial_deployment());
    assert_eq!(test.log().count_prefix("DEFINE TABLE Post"), 0);
}
