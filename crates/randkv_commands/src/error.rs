//! Command error taxonomy.
//!
//! All variants are request-level failures surfaced to the caller as error
//! replies; none are retried here and none are process-fatal. A failing
//! command leaves the shared engine usable and other keys untouched.

use thiserror::Error;

use randkv_core::error::SampleError;

/// Request-level command failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    /// Wrong number of arguments for a command.
    #[error("wrong number of arguments for '{command}' command")]
    WrongArity {
        /// The command name as dispatched.
        command: String,
    },

    /// An argument that should be numeric failed to parse, or a parameter
    /// was rejected by the distribution algorithm.
    #[error("invalid {field}")]
    InvalidArgument {
        /// The field that failed (e.g. "mean", "lambda", "count").
        field: &'static str,
    },

    /// Uniform bounds are inverted (low > high).
    #[error("invalid range")]
    InvalidRange,

    /// The target/source key exists and is not a list.
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,

    /// A histogram source element could not be parsed as a real.
    #[error("bad list value at index {index}")]
    BadListValue {
        /// Zero-based index of the offending element.
        index: usize,
    },

    /// The range read failed after the type check passed.
    #[error("could not read key")]
    KeyReadFailed,

    /// A user-controlled size exceeded the configured maximum.
    #[error("{what} {requested} exceeds maximum {max}")]
    ResourceLimit {
        /// What was limited ("count", "slots", "column width").
        what: &'static str,
        /// The requested size.
        requested: u64,
        /// The configured maximum.
        max: u64,
    },

    /// The dispatched name is not one of this module's commands.
    #[error("unknown command '{command}'")]
    UnknownCommand {
        /// The name as dispatched.
        command: String,
    },
}

impl CommandError {
    /// Maps a sampler rejection onto the command taxonomy.
    ///
    /// Uniform range inversion becomes [`CommandError::InvalidRange`];
    /// parameters the distribution constructor refuses surface as the
    /// `invalid <field>` message of the field that carried them.
    pub(crate) fn from_sample_error(err: SampleError) -> Self {
        match err {
            SampleError::InvalidRange { .. } => Self::InvalidRange,
            SampleError::BadParameter { name, .. } => Self::InvalidArgument { field: name },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = CommandError::InvalidArgument { field: "mean" };
        assert_eq!(err.to_string(), "invalid mean");

        let err = CommandError::InvalidArgument { field: "count" };
        assert_eq!(err.to_string(), "invalid count");
    }

    #[test]
    fn sample_errors_map_onto_the_taxonomy() {
        let err = CommandError::from_sample_error(SampleError::InvalidRange {
            low: 5.0,
            high: 2.0,
        });
        assert_eq!(err, CommandError::InvalidRange);

        let err = CommandError::from_sample_error(SampleError::BadParameter {
            name: "lambda",
            value: -1.0,
        });
        assert_eq!(err.to_string(), "invalid lambda");
    }

    #[test]
    fn limit_message_names_the_bound() {
        let err = CommandError::ResourceLimit {
            what: "count",
            requested: 10,
            max: 5,
        };
        assert_eq!(err.to_string(), "count 10 exceeds maximum 5");
    }
}
