use crate::data::{StudentStore, student::Student};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Fetches the whole `students` table off the request path.
#[derive(Clone, Debug)]
pub struct Loader {
    store: Arc<dyn StudentStore>,
}

impl Loader {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Starts one fetch and returns the channel its rows will arrive on.
    ///
    /// If the fetch fails the error is logged and the sender is dropped without sending, so the
    /// receiver only ever sees a complete result set or nothing at all.
    pub fn load(&self) -> oneshot::Receiver<Vec<Student>> {
        let (tx, rx) = oneshot::channel();
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            match store.fetch_all().await {
                Ok(rows) => {
                    debug!(count = rows.len(), "Loaded students");
                    if tx.send(rows).is_err() {
                        debug!("Load finished but nobody was waiting for it");
                    }
                }
                Err(e) => error!(?e, "Error loading students"),
            }
        });

        rx
    }
}
