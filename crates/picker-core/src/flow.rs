//! The picker flow: list repositories, let the user pick one, open it and
//! remember it.
//!
//! The prompt and the opener are traits so the CLI can plug in a terminal
//! prompt and an editor launcher while tests use fakes.

use std::path::{Path, PathBuf};

use picker_source::RepositorySource;

use crate::Result;
use crate::config::Settings;
use crate::items::{PickItem, build_items};
use crate::mru::{partition, record_opened, uniq_preserve_order};
use crate::state::MruStore;

/// Prompt title shown above the items
pub const PICK_TITLE: &str = "GHQ repositories";

/// Displays a sectioned list and returns the user's choice.
pub trait SelectionPresenter {
    /// Return the chosen entry's repository, or `None` when the user
    /// dismissed the prompt. Headers are never returned.
    fn select(&self, title: &str, items: &[PickItem]) -> Result<Option<String>>;
}

/// Opens a directory as an editor workspace.
pub trait WorkspaceOpener {
    fn open(&self, path: &Path, new_window: bool) -> Result<()>;
}

/// How a picker run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The repository was opened and recorded as most recent
    Opened { repo: String, path: PathBuf },
    /// The user dismissed the prompt; nothing changed
    Cancelled,
    /// The source listed no repositories; nothing was shown
    NoRepositories,
}

/// One picker invocation wired to its collaborators.
pub struct RepositoryPicker<'a> {
    source: &'a dyn RepositorySource,
    store: &'a dyn MruStore,
    presenter: &'a dyn SelectionPresenter,
    opener: &'a dyn WorkspaceOpener,
    open_in_new_window: bool,
    max_entries: usize,
}

impl<'a> RepositoryPicker<'a> {
    /// Create a picker using default settings.
    pub fn new(
        source: &'a dyn RepositorySource,
        store: &'a dyn MruStore,
        presenter: &'a dyn SelectionPresenter,
        opener: &'a dyn WorkspaceOpener,
    ) -> Self {
        let defaults = Settings::default();
        Self {
            source,
            store,
            presenter,
            opener,
            open_in_new_window: defaults.open_in_new_window,
            max_entries: defaults.max_entries(),
        }
    }

    /// Apply the window and MRU settings.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.open_in_new_window = settings.open_in_new_window;
        self.max_entries = settings.max_entries();
        self
    }

    pub fn open_in_new_window(mut self, new_window: bool) -> Self {
        self.open_in_new_window = new_window;
        self
    }

    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Run the flow once.
    ///
    /// Source failures abort before the MRU list is touched. The list is only
    /// written after the workspace was opened successfully.
    pub fn run(&self) -> Result<PickOutcome> {
        let root = self.source.root()?;
        let listed = self.source.list()?;

        if listed.is_empty() {
            tracing::info!("repository source returned no repositories");
            return Ok(PickOutcome::NoRepositories);
        }

        let repos = uniq_preserve_order(listed);
        let mru = uniq_preserve_order(self.store.load()?);
        let sections = partition(&repos, &mru);
        tracing::debug!(
            recent = sections.recent.len(),
            remaining = sections.remaining.len(),
            "partitioned repositories"
        );

        let items = build_items(&sections);
        let Some(repo) = self.presenter.select(PICK_TITLE, &items)? else {
            tracing::debug!("selection dismissed");
            return Ok(PickOutcome::Cancelled);
        };

        let path = root.join(&repo);
        tracing::info!(repo = %repo, path = %path.display(), "opening repository");
        self.opener.open(&path, self.open_in_new_window)?;

        let next = record_opened(&repo, &mru, self.max_entries);
        self.store.save(&next)?;

        Ok(PickOutcome::Opened { repo, path })
    }
}
