//! Service for handling accept/reject decisions.
//!
//! Keeps each record's [`ReviewStatus`] and the chosen directory in step:
//! a record is Accepted exactly when a link with its name exists, except
//! after a failed link operation. In that case the in-memory status still
//! moves to the requested state and the disk catches up on the next
//! successful transition of that record.

use crate::error::AppError;
use crate::image_registry::{ImageRegistry, ReviewStatus};
use crate::services::link_store::{LinkStore, SymlinkStore};
use log::{error, info};

/// What a review command did to a record.
#[derive(Debug)]
pub enum Transition {
    /// Already in the requested state. No I/O was performed.
    Unchanged(ReviewStatus),
    /// Status changed and the chosen directory was updated.
    Applied { from: ReviewStatus, to: ReviewStatus },
    /// Status changed but the link operation failed.
    Drifted {
        from: ReviewStatus,
        to: ReviewStatus,
        error: AppError,
    },
}

impl Transition {
    /// Status of the record after the command.
    pub fn status(&self) -> ReviewStatus {
        match self {
            Transition::Unchanged(status) => *status,
            Transition::Applied { to, .. } | Transition::Drifted { to, .. } => *to,
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self, Transition::Unchanged(_))
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Transition::Drifted { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Review state engine over a [`LinkStore`].
pub struct ReviewService<S: LinkStore = SymlinkStore> {
    store: S,
}

impl<S: LinkStore> ReviewService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Marks every record that already has a link as Accepted.
    ///
    /// Returns the number of records restored. Rejection is never persisted,
    /// so everything else stays Neutral.
    pub fn reconcile(&self, registry: &mut ImageRegistry) -> usize {
        let accepted: Vec<usize> = registry
            .iter()
            .enumerate()
            .filter(|(_, record)| self.store.exists(record.file_name()))
            .map(|(index, _)| index)
            .collect();

        for &index in &accepted {
            registry.restore_status(index, ReviewStatus::Accepted);
        }

        if !accepted.is_empty() {
            info!("Restored {} accepted images from previous run", accepted.len());
        }
        accepted.len()
    }

    /// Accept: always ends Accepted, (re)creating the link unless already Accepted.
    pub fn accept(&mut self, registry: &mut ImageRegistry, index: usize) -> Transition {
        self.apply(registry, index, ReviewStatus::Accepted)
    }

    /// Reject: ends Rejected, revoking any link.
    pub fn reject(&mut self, registry: &mut ImageRegistry, index: usize) -> Transition {
        self.apply(registry, index, ReviewStatus::Rejected)
    }

    /// Clears an acceptance back to Neutral; otherwise rejects.
    pub fn reject_or_clear(&mut self, registry: &mut ImageRegistry, index: usize) -> Transition {
        let target = match registry.at(index).status() {
            ReviewStatus::Accepted => ReviewStatus::Neutral,
            ReviewStatus::Neutral | ReviewStatus::Rejected => ReviewStatus::Rejected,
        };
        self.apply(registry, index, target)
    }

    fn apply(
        &mut self,
        registry: &mut ImageRegistry,
        index: usize,
        target: ReviewStatus,
    ) -> Transition {
        let record = registry.at(index);
        let from = record.status();
        if from == target {
            return Transition::Unchanged(from);
        }

        let name = record.display_name().to_string();
        let result = match target {
            ReviewStatus::Accepted => self.store.create(record.file_name(), record.source_path()),
            ReviewStatus::Neutral | ReviewStatus::Rejected => self.store.remove(record.file_name()),
        };

        registry.set_status(index, target);

        match result {
            Ok(()) => {
                info!("{}: {} -> {}", name, from, target);
                Transition::Applied { from, to: target }
            }
            Err(error) => {
                error!(
                    "{} (status is {} in memory only until the next change)",
                    error, target
                );
                Transition::Drifted {
                    from,
                    to: target,
                    error,
                }
            }
        }
    }
}
