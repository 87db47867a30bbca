/// Build a `Vec<Document>` from a json literal.
#[macro_export]
macro_rules! documents_vec {
    ($($json:tt)*) => {{
        let val = ::serde_json::json!($($json)*);
        let data: Vec<::taxdoc_storage::Document> = ::serde_json::from_value(val).unwrap();
        data
    }};
}
