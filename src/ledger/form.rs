use crate::ledger::TransactionStore;
use crate::models::{TransactionDraft, ValidationError};
use crate::storage::Storage;
use crate::types::TransactionId;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(TransactionId)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmitOutcome {
    Created(TransactionId),
    Updated(TransactionId),
    /// The transaction being edited no longer exists; nothing was changed.
    Missing(TransactionId)
}

/// The add/edit form: a draft plus whether submitting it creates or replaces an entry.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    mode: FormMode,
    pub draft: TransactionDraft
}

impl TransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Switches to editing `id` and loads its values into the draft.
    ///
    /// Returns `false` and leaves the form untouched when the store has no such entry.
    pub fn begin_edit<S: Storage>(&mut self, store: &TransactionStore<S>, id: TransactionId) -> bool {
        let Some(transaction) = store.get(id) else {
            debug!("Transaction [{id}] not found, form stays in {:?}", self.mode);
            return false
        };

        self.draft = TransactionDraft::from_details(&transaction.details);
        self.mode = FormMode::Editing(id);

        true
    }

    /// Abandons any edit in progress and clears the draft.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = TransactionDraft::default();
    }

    /// Validates the draft and applies it to the store.
    ///
    /// # Errors
    /// Returns `ValidationError` when the draft is incomplete or malformed. In that case
    /// neither the store nor the form mode changes.
    pub fn submit<S: Storage>(&mut self, store: &mut TransactionStore<S>) -> Result<SubmitOutcome, ValidationError> {
        let details = self.draft.validate()?;

        let outcome = match self.mode {
            FormMode::Creating => SubmitOutcome::Created(store.add(details)),
            FormMode::Editing(id) => {
                if store.update(id, details) {
                    SubmitOutcome::Updated(id)
                } else {
                    warn!("Transaction [{id}] disappeared while being edited");
                    SubmitOutcome::Missing(id)
                }
            }
        };

        self.mode = FormMode::Creating;
        self.draft.clear_entry();

        Ok(outcome)
    }
}
