//! Manual overrides on top of the automatic result.
//!
//! Once the engine has run, an operator may move entrants between brackets
//! and the outliers, seed new brackets, create empty ones and rename them.
//! Every command acts on one [`BracketResult`](crate::bracket::BracketResult)
//! snapshot and returns a typed outcome.
//!
//! - [`OverrideCommand`] and the `BracketResult` command methods apply edits.
//!   A move onto a full bracket evicts one entrant to keep the size at 5.
//! - [`DragPolicy`] decides whether a drag may be attempted at all. It is
//!   independent of the engine's validity rules and deliberately looser.
//! - [`Workspace`] ties a roster, a configuration and a result together.
//!   Any roster or configuration change reprocesses from scratch and
//!   discards manual edits. [`SharedWorkspace`] puts a workspace behind a
//!   lock for multi-threaded hosts.

mod commands;
mod compat;
mod workspace;

pub use commands::{CommandOutcome, MoveOutcome, MoveTarget, OverrideCommand, EMPTY_BRACKET_NAME};
pub use compat::{DragPolicy, MIN_ADULT_DROP_AGE};
pub use workspace::{SharedWorkspace, Workspace};
