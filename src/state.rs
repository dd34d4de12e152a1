use crate::{
    data::StudentStore,
    loader::Loader,
    maud_conveniences::render_shell,
    routes::sse::SseEvent,
    table::StudentTable,
};
use maud::Markup;
use std::sync::Arc;
use tokio::{
    sync::{
        RwLock,
        broadcast::{Receiver, Sender, channel},
    },
    task::JoinHandle,
};

/// Owns the table snapshot. Handlers and operations get this passed in explicitly.
#[derive(Clone, Debug)]
pub struct CorduroyState {
    store: Arc<dyn StudentStore>,
    loader: Loader,
    table: Arc<RwLock<StudentTable>>,
    sse_events_sender: Sender<SseEvent>,
}

impl CorduroyState {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        let (tx, _rx) = channel(16);

        Self {
            loader: Loader::new(Arc::clone(&store)),
            store,
            table: Arc::new(RwLock::new(StudentTable::default())),
            sse_events_sender: tx,
        }
    }

    #[allow(clippy::unused_self)] //keeps call sites the same as the rest of the state helpers
    pub fn render(&self, markup: Markup) -> Markup {
        render_shell(markup)
    }

    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }

    pub fn table(&self) -> &RwLock<StudentTable> {
        &self.table
    }

    /// Kicks off a background load and makes the table its only observer.
    ///
    /// The handle resolves to `true` once the table holds the new snapshot, or `false` if the
    /// load failed and the old snapshot was kept.
    pub fn reload(&self) -> JoinHandle<bool> {
        let rx = self.loader.load();
        let table = Arc::clone(&self.table);
        let sender = self.sse_events_sender.clone();

        tokio::spawn(async move {
            let Ok(rows) = rx.await else {
                return false;
            };

            table.write().await.populate(rows);
            let _ = sender.send(SseEvent::StudentsLoaded);
            true
        })
    }

    pub fn subscribe_to_sse_feed(&self) -> Receiver<SseEvent> {
        self.sse_events_sender.subscribe()
    }
}
