use crate::commands::Commands;
use crate::error::Result as ShellResult;
use crate::views::{Page, video_card::cards};

use std::sync::Arc;

use log::info;
use serde::Serialize;
use serde_json::Value;
use vh_config::Config;
use vh_core::{Identity, MockCatalog};
use vh_session::{
    AuthStatus, FileSessionSlot, GuardDecision, MockAuthenticator, Navigator, SessionStore,
};

const DEFAULT_LISTING: usize = 6;

#[derive(Debug, Serialize)]
struct SessionView {
    status: AuthStatus,
    identity: Option<Identity>,
}

#[derive(Debug, Serialize)]
struct OpenView {
    decision: GuardDecision,
    page: Option<Page>,
}

/// One shell invocation: a restored session plus the catalog.
pub struct App {
    store: SessionStore,
    catalog: MockCatalog,
}

impl App {
    pub fn new(store: SessionStore, catalog: MockCatalog) -> Self {
        Self { store, catalog }
    }

    /// Builds the file-backed store described by `config` and restores it.
    pub fn from_config(config: &Config) -> ShellResult<Self> {
        let slot = FileSessionSlot::new(config.session_dir()?, config.session.storage_key.as_str());
        info!("Session slot: {}", slot.path().display());

        let store = SessionStore::new(
            Arc::new(slot),
            Arc::new(MockAuthenticator::from_config(&config.auth)),
        );
        store.restore();

        Ok(Self::new(store, MockCatalog::new()))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub async fn execute(&self, command: Commands) -> ShellResult<Value> {
        let value = match command {
            Commands::Login { email, password } => {
                serde_json::to_value(self.store.login(&email, &password).await?)?
            }
            Commands::Register {
                name,
                email,
                password,
            } => serde_json::to_value(self.store.register(&name, &email, &password).await?)?,
            Commands::Logout => {
                self.store.logout();
                serde_json::to_value(self.session_view())?
            }
            Commands::Whoami => serde_json::to_value(self.session_view())?,
            Commands::Open { path } => serde_json::to_value(self.open(&path).await)?,
            Commands::Videos { recent, trending } => {
                let videos = match (recent, trending) {
                    (_, Some(limit)) => self.catalog.trending(limit),
                    (Some(limit), None) => self.catalog.recent(limit),
                    (None, None) => self.catalog.recent(DEFAULT_LISTING),
                };
                serde_json::to_value(cards(videos))?
            }
        };

        Ok(value)
    }

    fn session_view(&self) -> SessionView {
        let state = self.store.state();
        SessionView {
            status: state.status(),
            identity: state.identity,
        }
    }

    async fn open(&self, path: &str) -> OpenView {
        let mut navigator = Navigator::new(&self.store);
        let decision = navigator.navigate_when_ready(path).await;
        let state = self.store.state();
        let page = decision
            .target()
            .map(|route| Page::render(route, &state, &self.catalog));

        OpenView { decision, page }
    }
}
