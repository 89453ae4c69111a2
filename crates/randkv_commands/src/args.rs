//! Argument parsing helpers shared by all handlers.
//!
//! Parse failures carry the field name so the error reply reads
//! `invalid mean`, `invalid count`, and so on. Size arguments are checked
//! against the configured [`Limits`] here, before any allocation or
//! sampling.

use randkv_core::limits::Limits;

use crate::error::CommandError;

/// Parses a signed 64-bit integer argument.
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64, CommandError> {
    raw.parse::<i64>()
        .map_err(|_| CommandError::InvalidArgument { field })
}

/// Parses a finite real argument.
///
/// Non-finite inputs ("inf", "nan") are rejected alongside malformed ones;
/// every downstream consumer needs a finite parameter.
pub fn parse_real(field: &'static str, raw: &str) -> Result<f64, CommandError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::InvalidArgument { field }),
    }
}

/// Parses a sample count: non-negative, bounded by `limits.max_count`.
pub fn parse_count(raw: &str, limits: Limits) -> Result<u64, CommandError> {
    let count = parse_int("count", raw)?;
    if count < 0 {
        return Err(CommandError::InvalidArgument { field: "count" });
    }
    let count = count as u64;
    if count > limits.max_count {
        tracing::warn!(requested = count, max = limits.max_count, "count over limit");
        return Err(CommandError::ResourceLimit {
            what: "count",
            requested: count,
            max: limits.max_count,
        });
    }
    Ok(count)
}

/// Parses a histogram slot count: at least 1, bounded by `limits.max_slots`.
pub fn parse_slots(raw: &str, limits: Limits) -> Result<usize, CommandError> {
    let slots = parse_int("slots", raw)?;
    if slots < 1 {
        return Err(CommandError::InvalidArgument { field: "slots" });
    }
    let slots = slots as u64;
    if slots > limits.max_slots {
        tracing::warn!(requested = slots, max = limits.max_slots, "slots over limit");
        return Err(CommandError::ResourceLimit {
            what: "slots",
            requested: slots,
            max: limits.max_slots,
        });
    }
    Ok(slots as usize)
}

/// Parses a bar-chart column width: non-negative (0 = numeric mode),
/// bounded by `limits.max_column_width`.
pub fn parse_column_width(raw: &str, limits: Limits) -> Result<usize, CommandError> {
    let width = parse_int("column width", raw)?;
    if width < 0 {
        return Err(CommandError::InvalidArgument {
            field: "column width",
        });
    }
    let width = width as u64;
    if width > limits.max_column_width {
        tracing::warn!(
            requested = width,
            max = limits.max_column_width,
            "column width over limit"
        );
        return Err(CommandError::ResourceLimit {
            what: "column width",
            requested: width,
            max: limits.max_column_width,
        });
    }
    Ok(width as usize)
}
