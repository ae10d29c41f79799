//! Convenience macros.

/// Build a `HashMap<String, sea_query::Value>` record from `name => value` pairs.
///
/// Values go through `sea_query::Value::from`, so plain Rust literals pick the
/// matching variant (`3.14` is `Double`, `1.5f32` is `Float`, `"x"` is `String`).
///
/// ```
/// use lifeguard_columns::{record, Column, DoubleColumn};
///
/// let product = record! { "price" => 3.14, "name" => "widget" };
/// let price = DoubleColumn::new("price");
/// assert_eq!(price.sql_value_from_record(&product).unwrap(), "3.14");
/// ```
#[macro_export]
macro_rules! record {
    () => {
        ::std::collections::HashMap::<::std::string::String, $crate::sea_query::Value>::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = ::std::collections::HashMap::<::std::string::String, $crate::sea_query::Value>::new();
        $(
            record.insert(::std::string::String::from($name), $crate::sea_query::Value::from($value));
        )+
        record
    }};
}
