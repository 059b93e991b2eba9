//! Editing session: roster, configuration, and the current result.

use super::commands::{CommandOutcome, OverrideCommand};
use super::compat::DragPolicy;
use crate::bracket::{BracketId, BracketResult};
use crate::engine::{BracketEngine, EngineConfig};
use crate::entrant::{Entrant, EntrantId};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// One editing session.
///
/// Every roster or configuration change reprocesses from scratch, which
/// discards manual edits made since the last run. The methods that
/// reprocess return the number of edits discarded.
#[derive(Debug, Clone)]
pub struct Workspace {
    entrants: Vec<Entrant>,
    config: EngineConfig,
    result: BracketResult,
    manual_edits: usize,
}

impl Workspace {
    pub fn new(entrants: Vec<Entrant>, config: EngineConfig) -> Self {
        let result = BracketEngine::run(&entrants, &config);
        Self {
            entrants,
            config,
            result,
            manual_edits: 0,
        }
    }

    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn result(&self) -> &BracketResult {
        &self.result
    }

    /// Manual edits applied since the last reprocess.
    pub fn manual_edits(&self) -> usize {
        self.manual_edits
    }

    pub fn entrant(&self, id: &EntrantId) -> Option<&Entrant> {
        self.entrants.iter().find(|e| &e.id == id)
    }

    /// Rebuilds the result from the roster and configuration.
    ///
    /// Returns the number of manual edits discarded.
    pub fn reprocess(&mut self) -> usize {
        let discarded = std::mem::take(&mut self.manual_edits);
        if discarded > 0 {
            info!(event = "manual_edits_discarded", count = discarded);
        }
        self.result = BracketEngine::run(&self.entrants, &self.config);
        discarded
    }

    pub fn set_entrants(&mut self, entrants: Vec<Entrant>) -> usize {
        self.entrants = entrants;
        self.reprocess()
    }

    pub fn set_config(&mut self, config: EngineConfig) -> usize {
        self.config = config;
        self.reprocess()
    }

    pub fn add_entrant(&mut self, entrant: Entrant) -> usize {
        self.entrants.push(entrant);
        self.reprocess()
    }

    /// Replaces the entrant with the same id. Unknown ids are ignored and
    /// return `None`.
    pub fn update_entrant(&mut self, entrant: Entrant) -> Option<usize> {
        let Some(slot) = self.entrants.iter_mut().find(|e| e.id == entrant.id) else {
            warn!(event = "update_unknown_entrant", entrant = %entrant.id);
            return None;
        };
        *slot = entrant;
        Some(self.reprocess())
    }

    /// Adds a copy of an entrant under a fresh id, then reprocesses.
    ///
    /// The copy is placed by the engine like any other entrant. Returns the
    /// new id and the number of manual edits discarded.
    pub fn duplicate_entrant(&mut self, id: &EntrantId) -> Option<(EntrantId, usize)> {
        let Some(source) = self.entrant(id) else {
            warn!(event = "duplicate_unknown_entrant", entrant = %id);
            return None;
        };

        let mut copy = source.clone();
        copy.id = self.fresh_copy_id(id);
        copy.name = format!("{} (Copy)", source.name);
        let new_id = copy.id.clone();

        self.entrants.push(copy);
        Some((new_id, self.reprocess()))
    }

    /// Applies a manual override to the current result.
    pub fn apply(&mut self, command: OverrideCommand) -> CommandOutcome {
        let outcome = self.result.apply(command);
        if outcome.changed() {
            self.manual_edits += 1;
        }
        outcome
    }

    /// Whether the entrant may be dragged onto the bracket. Unknown ids
    /// are never droppable.
    pub fn can_drop(&self, entrant: &EntrantId, bracket: &BracketId) -> bool {
        match (self.entrant(entrant), self.result.bracket(bracket)) {
            (Some(e), Some(b)) => DragPolicy::can_drop(e, b),
            _ => false,
        }
    }

    fn fresh_copy_id(&self, id: &EntrantId) -> EntrantId {
        let mut n = 1;
        loop {
            let candidate = EntrantId::new(format!("{id}-copy-{n}"));
            if self.entrant(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

/// A [`Workspace`] shared between threads.
///
/// Writers take the lock for the whole command, so override commands on the
/// snapshot are serialized.
#[derive(Debug, Clone)]
pub struct SharedWorkspace {
    inner: Arc<RwLock<Workspace>>,
}

impl SharedWorkspace {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(workspace)),
        }
    }

    /// Runs `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&Workspace) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive write access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Workspace) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn apply(&self, command: OverrideCommand) -> CommandOutcome {
        self.write(|ws| ws.apply(command))
    }

    /// Clones the current result.
    pub fn snapshot(&self) -> BracketResult {
        self.read(|ws| ws.result().clone())
    }
}
