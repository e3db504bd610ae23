mod number;
mod tag;
mod value;

pub use number::NumberFormat;
pub use tag::{ParseFn, StringifyFn, TypeTag};
pub use value::{Typed, Value, ValueKind};
