//! # randkv_commands: Host-Facing Command Layer
//!
//! ## Layer 2 (Command) Role
//!
//! randkv_commands turns host command requests into sampling work:
//! - Host keyspace abstraction and in-memory implementation (`host`)
//! - Reply value model (`reply`)
//! - Command error taxonomy (`error`)
//! - Argument parsing helpers (`args`)
//! - Scalar, list-populating and histogram handlers (`scalar`, `populate`,
//!   `hist`)
//! - Name-based dispatch (`dispatch`)
//!
//! The host key-value store itself (storage engine, wire protocol, command
//! registration) stays outside this crate; it is reached only through the
//! [`host::Keyspace`] trait.
//!
//! ## Usage Example
//!
//! ```rust
//! use randkv_commands::context::CommandContext;
//! use randkv_commands::dispatch::dispatch;
//! use randkv_commands::host::MemoryKeyspace;
//! use randkv_commands::reply::Reply;
//!
//! let mut ctx = CommandContext::with_seed(42);
//! let mut keyspace = MemoryKeyspace::new();
//!
//! let reply = dispatch(&mut ctx, &mut keyspace, "RANDOM.DUNIF", &["5", "5"]).unwrap();
//! assert_eq!(reply, Reply::Integer(5));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod args;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod hist;
pub mod host;
pub mod populate;
pub mod reply;
pub mod scalar;

pub use context::CommandContext;
pub use error::CommandError;
pub use host::{KeyKind, Keyspace, MemoryKeyspace};
pub use reply::Reply;
