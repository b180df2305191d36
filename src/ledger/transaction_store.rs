use crate::models::{Transaction, TransactionDetails};
use crate::storage::Storage;
use crate::types::TransactionId;
use chrono::Utc;
use tracing::{debug, error, info, warn};

const TRANSACTIONS_KEY: &str = "transactions";

/// Owns the ordered collection of transactions and keeps it mirrored in storage.
///
/// Every mutation rewrites the full collection under the `transactions` key. Storage
/// failures are logged and otherwise ignored, so the in-memory collection is always
/// the source of truth for the running session.
pub struct TransactionStore<S: Storage> {
    storage: S,
    transactions: Vec<Transaction>,
    last_id: TransactionId
}

impl<S: Storage> TransactionStore<S> {
    /// Loads the persisted collection.
    ///
    /// A missing key, an unreadable value or content that does not parse all yield
    /// an empty collection.
    pub fn load(storage: S) -> Self {
        let transactions = match storage.load(TRANSACTIONS_KEY) {
            Ok(Some(value)) => serde_json::from_str::<Vec<Transaction>>(&value).unwrap_or_else(|error| {
                warn!("Stored transactions could not be parsed, starting empty: {error}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!("Stored transactions could not be read, starting empty: {error}");
                Vec::new()
            }
        };

        let last_id = transactions.iter().map(|transaction| transaction.id).max().unwrap_or(0);

        info!("Loaded [{}] transactions", transactions.len());

        Self {
            storage,
            transactions,
            last_id
        }
    }

    /// Appends a new transaction under a freshly minted identifier.
    pub fn add(&mut self, details: TransactionDetails) -> TransactionId {
        let id = self.mint_id();
        self.transactions.push(Transaction::new(id, details));
        debug!("Transaction [{id}] added");

        self.persist();

        id
    }

    /// Replaces every field of the matching transaction except its identifier.
    ///
    /// Returns `false` without touching storage when no transaction has `id`.
    pub fn update(&mut self, id: TransactionId, details: TransactionDetails) -> bool {
        let Some(transaction) = self.transactions.iter_mut().find(|transaction| transaction.id == id) else {
            debug!("Transaction [{id}] not found for update");
            return false
        };

        transaction.details = details;
        debug!("Transaction [{id}] updated");

        self.persist();

        true
    }

    /// Deletes the matching transaction. Returns `false` when no transaction has `id`.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let Some(position) = self.transactions.iter().position(|transaction| transaction.id == id) else {
            debug!("Transaction [{id}] not found for removal");
            return false
        };

        self.transactions.remove(position);
        debug!("Transaction [{id}] removed");

        self.persist();

        true
    }

    /// Writes the full collection to storage.
    pub fn persist(&self) {
        let value = match serde_json::to_string(&self.transactions) {
            Ok(value) => value,
            Err(error) => {
                error!("Transactions could not be serialized: {error}");
                return;
            }
        };

        if let Err(error) = self.storage.save(TRANSACTIONS_KEY, &value) {
            error!("{error}");
        }
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    //NOTE: Identifiers keep the millisecond timestamp shape of older data, but never repeat within one clock tick
    fn mint_id(&mut self) -> TransactionId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id.saturating_add(1));
        self.last_id
    }
}
