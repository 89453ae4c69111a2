//! Histogram command handler.
//!
//! `RANDOM.HIST key [slots=10] [colwidth=0]` reads back a list of decimal
//! values, bins them into equal-width slots and replies either with the
//! slot counts (numeric mode) or with asterisk bar rows (bar-chart mode).

use randkv_core::histogram::Histogram;

use crate::args::{parse_column_width, parse_slots};
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::host::{KeyKind, Keyspace};
use crate::reply::Reply;

/// Default number of histogram slots.
pub const DEFAULT_SLOTS: usize = 10;

/// `RANDOM.HIST key [slots] [colwidth]`.
///
/// The source key must already hold a list. An empty list replies
/// [`Reply::None`] (no output); callers must handle the missing reply
/// value. Any unparsable element fails the whole command with no partial
/// result.
pub fn random_hist<K: Keyspace>(
    ctx: &mut CommandContext,
    keyspace: &K,
    args: &[&str],
) -> Result<Reply, CommandError> {
    if args.is_empty() || args.len() > 3 {
        return Err(CommandError::WrongArity {
            command: "random.hist".into(),
        });
    }
    let key = args[0];
    let slots = match args.get(1) {
        Some(raw) => parse_slots(raw, ctx.limits())?,
        None => DEFAULT_SLOTS,
    };
    let column_width = match args.get(2) {
        Some(raw) => parse_column_width(raw, ctx.limits())?,
        None => 0,
    };

    if keyspace.key_kind(key) != KeyKind::List {
        return Err(CommandError::WrongType);
    }
    // Type check passed, so a missing range result is a read failure.
    let elements = keyspace.list_range_all(key).ok_or(CommandError::KeyReadFailed)?;
    if elements.is_empty() {
        return Ok(Reply::None);
    }

    let mut values = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let value: f64 = element
            .parse()
            .map_err(|_| CommandError::BadListValue { index })?;
        values.push(value);
    }

    let hist = Histogram::build(&values, slots);
    if column_width == 0 {
        Ok(Reply::Array(
            hist.counts()
                .iter()
                .map(|&count| Reply::Integer(count as i64))
                .collect(),
        ))
    } else {
        Ok(Reply::Array(
            hist.bar_rows(column_width).into_iter().map(Reply::Bulk).collect(),
        ))
    }
}
