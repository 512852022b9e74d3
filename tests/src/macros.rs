/// Declares every listed table on a fresh `Db` builder.
#[macro_export]
macro_rules! tables {
    (
        $( $table:expr ),* $(,)?
    ) => {{
        let mut builder = quarry::Db::builder();
        $( builder.table($table); )*
        builder
    }};
}
