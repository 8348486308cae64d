use std::collections::HashMap;
use std::sync::Arc;

use crate::content::Content;
use crate::error::LoadError;
use crate::view::{self, DeferredSource, Loader, ViewId};

/// Load progress of a deferred view. Eager views have no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLoadStatus {
    NotRequested,
    Loading,
    Ready,
    Failed,
}

/// What the content slot can show for a view right now.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Ready(&'a Content),
    Loading,
    Failed(&'a LoadError),
}

struct Entry {
    status: Option<ViewLoadStatus>,
    source: Option<DeferredSource>,
    content: Option<Arc<Content>>,
    error: Option<LoadError>,
    requests: u32,
}

/// Tracks deferred views from first request to resolution.
///
/// A view is handed out for loading at most once per session: once it has
/// left `NotRequested` it never goes back, and `Ready` is terminal.
pub struct LoadGate {
    entries: HashMap<ViewId, Entry>,
}

impl Default for LoadGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadGate {
    pub fn new() -> Self {
        let entries = ViewId::ALL
            .into_iter()
            .map(|id| {
                let entry = match view::resolve(id) {
                    Loader::Eager(content) => Entry {
                        status: None,
                        source: None,
                        content: Some(Arc::new(content)),
                        error: None,
                        requests: 0,
                    },
                    Loader::Deferred(source) => Entry {
                        status: Some(ViewLoadStatus::NotRequested),
                        source: Some(source),
                        content: None,
                        error: None,
                        requests: 0,
                    },
                };
                (id, entry)
            })
            .collect();
        Self { entries }
    }

    pub fn status(&self, view: ViewId) -> Option<ViewLoadStatus> {
        self.entries.get(&view).and_then(|e| e.status)
    }

    /// Number of loads handed out for `view` this session (0 or 1).
    pub fn requests(&self, view: ViewId) -> u32 {
        self.entries.get(&view).map_or(0, |e| e.requests)
    }

    /// Ready to mount: eager, or deferred and resolved.
    pub fn is_ready(&self, view: ViewId) -> bool {
        self.entries.get(&view).is_some_and(|e| e.content.is_some())
    }

    /// Moves `view` from `NotRequested` to `Loading` and returns the source
    /// to fetch. Returns `None` for eager views and for views already
    /// requested.
    pub fn request(&mut self, view: ViewId) -> Option<DeferredSource> {
        let entry = self.entries.get_mut(&view)?;
        if entry.status != Some(ViewLoadStatus::NotRequested) {
            return None;
        }
        entry.status = Some(ViewLoadStatus::Loading);
        entry.requests += 1;
        tracing::info!("{view}: load requested");
        entry.source
    }

    /// Records the outcome of a load. Results for views that are not
    /// `Loading` are dropped.
    pub fn complete(
        &mut self,
        view: ViewId,
        result: Result<Arc<Content>, LoadError>,
    ) -> Option<ViewLoadStatus> {
        let entry = self.entries.get_mut(&view)?;
        if entry.status != Some(ViewLoadStatus::Loading) {
            tracing::debug!("{view}: dropping load result in state {:?}", entry.status);
            return entry.status;
        }
        match result {
            Ok(content) => {
                entry.content = Some(content);
                entry.status = Some(ViewLoadStatus::Ready);
                tracing::info!("{view}: Loading -> Ready");
            }
            Err(e) => {
                tracing::warn!("{view}: Loading -> Failed ({e})");
                entry.error = Some(e);
                entry.status = Some(ViewLoadStatus::Failed);
            }
        }
        entry.status
    }

    pub fn resolved(&self, view: ViewId) -> Resolved<'_> {
        match self.entries.get(&view) {
            Some(Entry {
                content: Some(content),
                ..
            }) => Resolved::Ready(content.as_ref()),
            Some(Entry {
                error: Some(error), ..
            }) => Resolved::Failed(error),
            _ => Resolved::Loading,
        }
    }
}
