//! Reply value model.
//!
//! Handlers produce [`Reply`] values; the host's wire layer is responsible
//! for encoding them. `Double` carries the raw `f64`; where a textual form
//! is needed it uses the same 19-fractional-digit rendering as persisted
//! list elements.

use std::fmt;

use randkv_core::distributions::ELEMENT_PRECISION;

/// A command reply before host wire encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// 64-bit signed integer reply.
    Integer(i64),
    /// Double-precision reply.
    Double(f64),
    /// Bulk string reply (bar-chart rows).
    Bulk(String),
    /// Array reply (histogram output).
    Array(Vec<Reply>),
    /// No reply value emitted (histogram over an empty list).
    None,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{:.*}", ELEMENT_PRECISION, v),
            Self::Bulk(s) => write!(f, "{}", s),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Self::None => Ok(()),
        }
    }
}
