//! One column type per native kind.

mod big_integer;
mod blob;
mod boolean;
mod date;
mod date_time;
mod decimal;
mod double;
mod float;
mod integer;
mod json;
mod text;
mod uuid;

pub use big_integer::BigIntegerColumn;
pub use blob::BlobColumn;
pub use boolean::BooleanColumn;
pub use date::DateColumn;
pub use date_time::DateTimeColumn;
pub use decimal::DecimalColumn;
pub use double::DoubleColumn;
pub use float::FloatColumn;
pub use integer::IntegerColumn;
pub use json::JsonColumn;
pub use text::TextColumn;
pub use self::uuid::UuidColumn;
