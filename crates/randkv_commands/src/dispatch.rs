//! Name-based command dispatch.
//!
//! Routes the eight `RANDOM.*` command names to their handlers. Host-side
//! command registration stays out of scope; hosts that register commands
//! individually can call the handler functions directly instead.

use crate::context::CommandContext;
use crate::error::CommandError;
use crate::hist::random_hist;
use crate::host::Keyspace;
use crate::populate::{random_lexp, random_lnorm, random_lunif};
use crate::reply::Reply;
use crate::scalar::{random_dunif, random_exp, random_norm, random_unif};

/// Dispatches one command; `args` holds the arguments after the name.
/// Command names match case-insensitively.
pub fn dispatch<K: Keyspace>(
    ctx: &mut CommandContext,
    keyspace: &mut K,
    command: &str,
    args: &[&str],
) -> Result<Reply, CommandError> {
    tracing::debug!(command, argc = args.len(), "dispatching");
    match command.to_ascii_lowercase().as_str() {
        "random.dunif" => random_dunif(ctx, args),
        "random.unif" => random_unif(ctx, args),
        "random.norm" => random_norm(ctx, args),
        "random.exp" => random_exp(ctx, args),
        "random.lunif" => random_lunif(ctx, keyspace, args),
        "random.lnorm" => random_lnorm(ctx, keyspace, args),
        "random.lexp" => random_lexp(ctx, keyspace, args),
        "random.hist" => random_hist(ctx, keyspace, args),
        _ => Err(CommandError::UnknownCommand {
            command: command.to_string(),
        }),
    }
}
