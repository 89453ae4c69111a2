//! Scalar command handlers.
//!
//! One handler per distribution; each validates its arguments, samples
//! exactly once from the shared engine and replies with the value. `args`
//! holds the arguments after the command name.

use randkv_core::distributions::DistributionSpec;

use crate::args::{parse_int, parse_real};
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::reply::Reply;

/// `RANDOM.DUNIF start end` — integer uniform over `[start, end]`.
pub fn random_dunif(ctx: &mut CommandContext, args: &[&str]) -> Result<Reply, CommandError> {
    if args.len() != 2 {
        return Err(CommandError::WrongArity {
            command: "random.dunif".into(),
        });
    }
    let low = parse_int("start", args[0])?;
    let high = parse_int("end", args[1])?;
    if low > high {
        return Err(CommandError::InvalidRange);
    }

    let spec = DistributionSpec::DiscreteUniform { low, high };
    let sample = spec
        .sample(ctx.engine())
        .map_err(CommandError::from_sample_error)?;
    // Discrete uniform always yields an integer sample.
    Ok(Reply::Integer(sample.as_int().unwrap_or_default()))
}

/// `RANDOM.UNIF start end` — real uniform over `[start, end)`.
pub fn random_unif(ctx: &mut CommandContext, args: &[&str]) -> Result<Reply, CommandError> {
    if args.len() != 2 {
        return Err(CommandError::WrongArity {
            command: "random.unif".into(),
        });
    }
    let low = parse_real("start", args[0])?;
    let high = parse_real("end", args[1])?;
    if low > high {
        return Err(CommandError::InvalidRange);
    }

    let spec = DistributionSpec::ContinuousUniform { low, high };
    let sample = spec
        .sample(ctx.engine())
        .map_err(CommandError::from_sample_error)?;
    Ok(Reply::Double(sample.as_real()))
}

/// `RANDOM.NORM [mean=0.0] [stddev=1.0]` — Gaussian sample.
pub fn random_norm(ctx: &mut CommandContext, args: &[&str]) -> Result<Reply, CommandError> {
    if args.len() > 2 {
        return Err(CommandError::WrongArity {
            command: "random.norm".into(),
        });
    }
    let (mean, stddev) = parse_norm_params(args.first().copied(), args.get(1).copied())?;

    let spec = DistributionSpec::Normal { mean, stddev };
    let sample = spec
        .sample(ctx.engine())
        .map_err(CommandError::from_sample_error)?;
    Ok(Reply::Double(sample.as_real()))
}

/// `RANDOM.EXP [lambda=1.0]` — exponential sample.
pub fn random_exp(ctx: &mut CommandContext, args: &[&str]) -> Result<Reply, CommandError> {
    if args.len() > 1 {
        return Err(CommandError::WrongArity {
            command: "random.exp".into(),
        });
    }
    let rate = parse_exp_param(args.first().copied())?;

    let spec = DistributionSpec::Exponential { rate };
    let sample = spec
        .sample(ctx.engine())
        .map_err(CommandError::from_sample_error)?;
    Ok(Reply::Double(sample.as_real()))
}

/// Parses the optional normal parameters, defaulting to mean 0.0, stddev 1.0.
pub(crate) fn parse_norm_params(
    mean: Option<&str>,
    stddev: Option<&str>,
) -> Result<(f64, f64), CommandError> {
    let mean = match mean {
        Some(raw) => parse_real("mean", raw)?,
        None => 0.0,
    };
    let stddev = match stddev {
        Some(raw) => parse_real("standard deviation", raw)?,
        None => 1.0,
    };
    Ok((mean, stddev))
}

/// Parses the optional exponential rate, defaulting to 1.0.
pub(crate) fn parse_exp_param(rate: Option<&str>) -> Result<f64, CommandError> {
    match rate {
        Some(raw) => parse_real("lambda", raw),
        None => Ok(1.0),
    }
}
