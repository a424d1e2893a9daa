/// The type of a single bound (or unbound) cell in a result row.
///
/// Discriminants match the wire encoding directly — the type array on the
/// wire is read as plain `i32`s and converted with [`ValueType::from_i32`]
/// rather than transmuted, so a future wire revision can add variants
/// without breaking decode of old streams (unrecognized values become a
/// decode error instead of undefined behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Unbound,
    Uri,
    String,
    Integer,
    Double,
    DateTime,
    Blank,
    Boolean,
}

impl ValueType {
    pub fn from_i32(tag: i32) -> Option<Self> {
        Some(match tag {
            0 => ValueType::Unbound,
            1 => ValueType::Uri,
            2 => ValueType::String,
            3 => ValueType::Integer,
            4 => ValueType::Double,
            5 => ValueType::DateTime,
            6 => ValueType::Blank,
            7 => ValueType::Boolean,
            _ => return None,
        })
    }
}
