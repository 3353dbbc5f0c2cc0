//! The task that owns [`ShopState`].
//!
//! All mutations arrive as [`Message`]s on one channel and are applied in
//! arrival order, followed by a full re-render. The newest tree is published
//! through a `watch` channel, so readers never wait on the runtime. Network
//! calls run on their own tasks and report back with exactly one message.

use std::sync::Arc;

use chrono::Utc;
use hollixton_core::{Bag, Email};
use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use super::action::Action;
use super::state::ShopState;
use super::update::{Effect, Message, update};
use crate::dom::DomNode;
use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::remote::{SignInError, StoreApi};
use crate::session::SessionMarker;
use crate::view::render;

/// Pending commands before senders wait.
const COMMAND_BUFFER: usize = 64;

/// Errors from [`Shop`] handles.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The runtime task has stopped.
    #[error("shop runtime is not running")]
    Closed,

    #[error(transparent)]
    SignIn(#[from] SignInError),
}

enum Command {
    Apply {
        message: Message,
        done: Option<oneshot::Sender<()>>,
    },
    Inspect(oneshot::Sender<ShopState>),
}

/// Handle to the running shop. Cheap to clone.
#[derive(Clone)]
pub struct Shop {
    tx: mpsc::Sender<Command>,
    view: watch::Receiver<Arc<DomNode>>,
    store: Arc<dyn StoreApi>,
}

impl Shop {
    /// Render the empty state, start the runtime, then fetch the catalog and
    /// restore the remembered customer concurrently.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(store: Arc<dyn StoreApi>, marker: SessionMarker) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let state = ShopState::default();
        let (view_tx, view) = watch::channel(Arc::new(render(&state, Utc::now())));

        let runtime = Runtime {
            state,
            rx,
            view: view_tx,
            store: Arc::clone(&store),
            marker: marker.clone(),
        };
        tokio::spawn(runtime.run());
        tokio::spawn(load_catalog(Arc::clone(&store), tx.clone()));
        tokio::spawn(restore_session(Arc::clone(&store), marker, tx.clone()));

        Self { tx, view, store }
    }

    /// Apply `action` and return the tree rendered after it.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::Closed` if the runtime has stopped.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<DomNode>, ShopError> {
        self.apply(Message::User(action)).await?;
        Ok(self.current_view())
    }

    /// Check credentials against the record store and, on success, sign the
    /// customer in. State is untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns `SignInError::InvalidCredentials` for a malformed email, an
    /// unknown user or a wrong password; remote failures as they occurred.
    pub async fn sign_in(&self, email: &str, password: SecretString) -> Result<(), ShopError> {
        let Ok(email) = Email::parse(email) else {
            return Err(SignInError::InvalidCredentials.into());
        };
        let account = self.store.authenticate(&email, &password).await?;
        info!(user = %email, "Customer signed in");
        self.apply(Message::SignedIn(account)).await
    }

    /// The newest rendered tree.
    #[must_use]
    pub fn current_view(&self) -> Arc<DomNode> {
        self.view.borrow().clone()
    }

    /// A receiver that observes every published tree.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<DomNode>> {
        self.view.clone()
    }

    /// A copy of the current state.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::Closed` if the runtime has stopped.
    pub async fn state(&self) -> Result<ShopState, ShopError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Inspect(reply))
            .await
            .map_err(|_| ShopError::Closed)?;
        rx.await.map_err(|_| ShopError::Closed)
    }

    /// Send `message` and wait until it has been applied and rendered.
    async fn apply(&self, message: Message) -> Result<(), ShopError> {
        let (done, rx) = oneshot::channel();
        self.tx
            .send(Command::Apply {
                message,
                done: Some(done),
            })
            .await
            .map_err(|_| ShopError::Closed)?;
        rx.await.map_err(|_| ShopError::Closed)
    }
}

struct Runtime {
    state: ShopState,
    rx: mpsc::Receiver<Command>,
    view: watch::Sender<Arc<DomNode>>,
    store: Arc<dyn StoreApi>,
    marker: SessionMarker,
}

impl Runtime {
    async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            match command {
                Command::Apply { message, done } => {
                    self.handle(message).await;
                    if let Some(done) = done {
                        let _ = done.send(());
                    }
                }
                Command::Inspect(reply) => {
                    let _ = reply.send(self.state.clone());
                }
            }
        }
        debug!("Shop runtime stopped");
    }

    async fn handle(&mut self, message: Message) {
        if let Message::User(action) = &message {
            debug!(action = %action, "Applying action");
        }

        let transition = update(&self.state, message);
        self.state.apply(transition.patch);
        self.view.send_replace(Arc::new(render(&self.state, Utc::now())));

        for effect in transition.effects {
            self.run_effect(effect).await;
        }
    }

    async fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::SyncBag { customer, bag } => {
                let entries = bag.len().to_string();
                add_breadcrumb("bag", "Bag changed", Some(&[("entries", entries.as_str())]));
                tokio::spawn(sync_bag(Arc::clone(&self.store), customer, bag));
            }
            Effect::PersistMarker(email) => {
                set_sentry_user(&email, Some(email.as_str()));
                add_breadcrumb("session", "Signed in", None);
                if let Err(e) = self.marker.save(&email).await {
                    warn!(error = %e, "Failed to write session marker");
                }
            }
            Effect::ClearMarker => {
                clear_sentry_user();
                add_breadcrumb("session", "Signed out", None);
                if let Err(e) = self.marker.clear().await {
                    warn!(error = %e, "Failed to remove session marker");
                }
            }
        }
    }
}

async fn send(tx: &mpsc::Sender<Command>, message: Message) {
    let command = Command::Apply {
        message,
        done: None,
    };
    if tx.send(command).await.is_err() {
        debug!("Shop runtime gone, dropping message");
    }
}

async fn load_catalog(store: Arc<dyn StoreApi>, tx: mpsc::Sender<Command>) {
    match store.fetch_catalog().await {
        Ok(items) => {
            info!(count = items.len(), "Catalog loaded");
            send(&tx, Message::CatalogLoaded(items)).await;
        }
        Err(e) => warn!(error = %e, "Failed to load catalog"),
    }
}

async fn restore_session(
    store: Arc<dyn StoreApi>,
    marker: SessionMarker,
    tx: mpsc::Sender<Command>,
) {
    let email = match marker.load().await {
        Ok(Some(email)) => email,
        Ok(None) => {
            debug!("No user signed in");
            return;
        }
        Err(e) => {
            warn!(error = %e, path = %marker.path().display(), "Unreadable session marker");
            return;
        }
    };

    match store.fetch_account(&email).await {
        Ok(account) => {
            info!(user = %email, "Session restored");
            send(&tx, Message::SessionRestored(account)).await;
        }
        Err(e) => warn!(user = %email, error = %e, "Failed to restore session"),
    }
}

async fn sync_bag(store: Arc<dyn StoreApi>, customer: Email, bag: Bag) {
    if let Err(e) = store.update_bag(&customer, &bag).await {
        warn!(user = %customer, error = %e, "Bag sync failed");
    }
}
