//! Round trips through a real SQLite engine: bind through `rusqlite`, render
//! literals, read rows back, and normalize what SQLite returns.

#![cfg(feature = "sqlite")]

use chrono::NaiveDate;
use lifeguard_columns::{
    record, BigIntegerColumn, BlobColumn, BooleanColumn, Column, ColumnError, DateColumn,
    DecimalColumn, DoubleColumn, FloatColumn, JsonColumn, Record, StatementBinder, TableSchema,
    TextColumn, UuidColumn,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::types::Value as SqliteValue;
use rusqlite::Connection;
use rust_decimal::Decimal;
use sea_query::Value;
use std::collections::HashMap;

fn connection() -> Connection {
    Connection::open_in_memory().expect("in-memory database")
}

/// Evaluate `SELECT <literal>` and return the raw SQLite value
fn select_literal(conn: &Connection, literal: &str) -> SqliteValue {
    conn.query_row(&format!("SELECT {literal}"), [], |row| row.get(0))
        .expect("literal should parse")
}

/// Bind `value` into `SELECT ?1` and return what SQLite hands back
fn select_bound(conn: &Connection, column: &dyn Column, value: &Value) -> SqliteValue {
    let mut stmt = conn.prepare("SELECT ?1").unwrap();
    column.bind(&mut stmt, 1, value).unwrap();
    let mut rows = stmt.raw_query();
    let row = rows.next().unwrap().expect("one row");
    row.get(0).unwrap()
}

/// Convert a value read from SQLite into the dynamic representation
fn from_sqlite(value: SqliteValue) -> Value {
    match value {
        SqliteValue::Null => Value::String(None),
        SqliteValue::Integer(i) => Value::BigInt(Some(i)),
        SqliteValue::Real(f) => Value::Double(Some(f)),
        SqliteValue::Text(s) => Value::String(Some(s)),
        SqliteValue::Blob(b) => Value::Bytes(Some(b)),
    }
}

#[test]
fn double_literals_are_read_back_exactly() {
    let conn = connection();
    let column = DoubleColumn::new("price");
    for v in [3.14, 0.1, 1.0 / 3.0, 42.0, -2.5e-10, 1e300] {
        let literal = column.sql_value(Some(&Value::Double(Some(v)))).unwrap();
        assert_eq!(select_literal(&conn, &literal), SqliteValue::Real(v), "literal {literal}");
    }
}

/// Bits of the REAL SQLite parses from `literal`
fn literal_bits(conn: &Connection, literal: &str) -> u64 {
    match select_literal(conn, literal) {
        SqliteValue::Real(f) => f.to_bits(),
        other => panic!("literal {literal} read back as {other:?}"),
    }
}

#[test]
fn random_double_literals_parse_to_the_same_bits() {
    let conn = connection();
    let column = DoubleColumn::new("reading");
    let mut rng = StdRng::seed_from_u64(0x5EED_5C1E);
    let edges = [
        -0.0,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::from_bits(1),
        f64::from_bits(0x000F_FFFF_FFFF_FFFF),
        -2.404858437694134e60,
        1.103203030177992e-153,
    ];
    let random = (0..20_000).map(|_| f64::from_bits(rng.gen::<u64>()));

    for v in edges.into_iter().chain(random).filter(|v| !v.is_nan()) {
        let literal = column.sql_value(Some(&Value::Double(Some(v)))).unwrap();
        assert_eq!(literal_bits(&conn, &literal), v.to_bits(), "literal {literal}");
    }
}

#[test]
fn random_float_literals_parse_to_the_same_bits() {
    let conn = connection();
    let column = FloatColumn::new("weight");
    let mut rng = StdRng::seed_from_u64(0x5EED_F10A);
    let edges = [-0.0f32, f32::MAX, f32::MIN_POSITIVE, f32::from_bits(1)];
    let random = (0..20_000).map(|_| f32::from_bits(rng.gen::<u32>()));

    for v in edges.into_iter().chain(random).filter(|v| !v.is_nan()) {
        let literal = column.sql_value(Some(&Value::Float(Some(v)))).unwrap();
        assert_eq!(
            literal_bits(&conn, &literal),
            f64::from(v).to_bits(),
            "literal {literal}"
        );
    }
}

#[test]
fn infinity_literal_is_infinite_in_sqlite() {
    let conn = connection();
    let column = DoubleColumn::new("limit");
    let literal = column
        .sql_value(Some(&Value::Double(Some(f64::NEG_INFINITY))))
        .unwrap();
    assert_eq!(select_literal(&conn, &literal), SqliteValue::Real(f64::NEG_INFINITY));
}

#[test]
fn float_bind_and_literal_agree() {
    let conn = connection();
    let column = FloatColumn::new("weight");
    let value = Value::Float(Some(0.1));
    let bound = select_bound(&conn, &column, &value);
    let literal = column.sql_value(Some(&value)).unwrap();
    assert_eq!(bound, select_literal(&conn, &literal));
    assert_eq!(column.normalize(&from_sqlite(bound)).unwrap(), value);
}

#[test]
fn null_binds_as_sql_null() {
    let conn = connection();
    let column = FloatColumn::new("weight");
    assert_eq!(select_bound(&conn, &column, &Value::Float(None)), SqliteValue::Null);
    assert_eq!(select_literal(&conn, &column.sql_value(None).unwrap()), SqliteValue::Null);
}

fn case(column: impl Column + 'static, value: Value) -> (Box<dyn Column>, Value) {
    (Box::new(column), value)
}

#[test]
fn stored_forms_normalize_back() {
    let conn = connection();
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let cases = vec![
        case(BigIntegerColumn::new("id"), Value::BigInt(Some(i64::MIN))),
        case(BooleanColumn::new("active"), Value::Bool(Some(true))),
        case(TextColumn::new("name"), Value::String(Some("it's".to_string()))),
        case(DateColumn::new("day"), Value::ChronoDate(Some(date))),
        case(BlobColumn::new("data"), Value::Bytes(Some(vec![0, 1, 254, 255]))),
        case(UuidColumn::new("uid"), Value::Uuid(Some(uuid::Uuid::new_v4()))),
        case(DecimalColumn::new("amount"), Value::Decimal(Some(Decimal::new(1050, 2)))),
        case(
            JsonColumn::new("doc"),
            Value::Json(Some(Box::new(serde_json::json!({"a": [1, "two"]})))),
        ),
    ];

    for (column, value) in cases {
        let bound = from_sqlite(select_bound(&conn, column.as_ref(), &value));
        assert_eq!(column.normalize(&bound).unwrap(), value, "bound {}", column.name());

        let literal = column.sql_value(Some(&value)).unwrap();
        let selected = from_sqlite(select_literal(&conn, &literal));
        assert_eq!(column.normalize(&selected).unwrap(), value, "literal {literal}");
    }
}

#[test]
fn out_of_range_index_reports_sqlite_error() {
    let conn = connection();
    let mut stmt = conn.prepare("SELECT ?1").unwrap();
    let err = DoubleColumn::new("price")
        .bind(&mut stmt, 2, &Value::Double(Some(1.0)))
        .unwrap_err();
    match err {
        ColumnError::Bind { index, source, .. } => {
            assert_eq!(index, 2);
            assert_ne!(source.code, 0);
        }
        other => panic!("expected bind error, got {other:?}"),
    }
}

#[test]
fn schema_creates_inserts_and_reads_rows() {
    let conn = connection();
    let schema = TableSchema::builder("products")
        .big_integer("id")
        .text("name")
        .double("price")
        .float("weight")
        .decimal("cost")
        .build()
        .unwrap();
    conn.execute_batch(&schema.create_table_sql()).unwrap();

    // parameterized path
    let bolt = record! { "id" => 1i64, "name" => "bolt", "price" => 0.1, "cost" => Decimal::new(1000, 3) };
    let mut stmt = conn.prepare(&schema.insert_statement_sql()).unwrap();
    assert_eq!(StatementBinder::parameter_count(&stmt), Some(5));
    schema.bind_record(&mut stmt, &bolt).unwrap();
    stmt.raw_execute().unwrap();
    drop(stmt);

    // literal path
    let nut = record! { "id" => 2i64, "name" => "nut", "price" => 2.5, "weight" => 0.25f32 };
    let records: [&dyn Record; 1] = [&nut];
    let sql = schema.insert_sql(&records).unwrap().unwrap();
    conn.execute_batch(&sql).unwrap();

    let mut select = conn
        .prepare(r#"SELECT "id", "name", "price", "weight", "cost" FROM "products" ORDER BY "id""#)
        .unwrap();
    let rows: Vec<HashMap<String, Value>> = select
        .query_map([], |row| {
            let mut stored = HashMap::new();
            for (position, column) in schema.columns().iter().enumerate() {
                let value: SqliteValue = row.get(position)?;
                stored.insert(column.name().to_string(), from_sqlite(value));
            }
            Ok(stored)
        })
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let first = schema.normalize_record(&rows[0]).unwrap();
    assert_eq!(first["price"], Value::Double(Some(0.1)));
    assert_eq!(first["cost"], Value::Decimal(Some(Decimal::new(1000, 3))));
    assert_eq!(first["weight"], Value::String(None));

    let second = schema.normalize_record(&rows[1]).unwrap();
    assert_eq!(second["name"], Value::String(Some("nut".to_string())));
    assert_eq!(second["weight"], Value::Float(Some(0.25)));
    assert_eq!(second["cost"], Value::String(None));
}
