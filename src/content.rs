use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::channel::oneshot;
use serde::Deserialize;

use crate::error::LoadError;
use crate::view::{DeferredSource, ViewId};

// --- Content documents ---

#[derive(Debug, Clone, PartialEq)]
pub struct HomeContent {
    pub greeting: &'static str,
    pub lead: &'static str,
    /// Word underlined by the sketch effect.
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillArea {
    pub title: String,
    pub badge: String,
    pub color: String,
    pub percentage: u8,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tool {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillsContent {
    pub areas: Vec<SkillArea>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutContent {
    pub headline: String,
    pub intro: String,
    pub body: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsContent {
    pub profile: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Home(HomeContent),
    Skills(SkillsContent),
    About(AboutContent),
    Projects(ProjectsContent),
}

pub fn home() -> HomeContent {
    HomeContent {
        greeting: "Hi, I'm Moaz.",
        lead: "A Data",
        highlight: "Analyst",
        tagline: "I transform data into actionable insights. Specializing in Business \
                  Intelligence, ETL Development, Dashboard Creation, and Data Visualization.",
        primary_action: "View Projects",
        secondary_action: "Get In Touch",
    }
}

// --- Decoding ---

/// Decode and validate a deferred view's document.
pub fn decode(source: DeferredSource) -> Result<Content, LoadError> {
    let view = source.view;
    let malformed = |e: serde_json::Error| LoadError::Malformed {
        view,
        reason: e.to_string(),
    };
    let content = match view {
        ViewId::Home => {
            return Err(LoadError::Invalid {
                view,
                reason: "home content is compiled in".to_string(),
            });
        }
        ViewId::Skills => Content::Skills(serde_json::from_str(source.document).map_err(malformed)?),
        ViewId::About => Content::About(serde_json::from_str(source.document).map_err(malformed)?),
        ViewId::Projects => {
            Content::Projects(serde_json::from_str(source.document).map_err(malformed)?)
        }
    };
    validate(view, &content)?;
    Ok(content)
}

fn validate(view: ViewId, content: &Content) -> Result<(), LoadError> {
    let invalid = |reason: String| Err(LoadError::Invalid { view, reason });
    match content {
        Content::Skills(skills) => {
            if skills.areas.is_empty() {
                return invalid("no skill areas".to_string());
            }
            if let Some(area) = skills.areas.iter().find(|a| a.percentage > 100) {
                return invalid(format!("{} proficiency is {}%", area.title, area.percentage));
            }
        }
        Content::Projects(projects) => {
            if projects.projects.is_empty() {
                return invalid("no projects".to_string());
            }
            if let Some(p) = projects.projects.iter().find(|p| p.link.trim().is_empty()) {
                return invalid(format!("project {} has no link", p.id));
            }
        }
        Content::About(about) => {
            if about.headline.trim().is_empty() {
                return invalid("empty headline".to_string());
            }
        }
        Content::Home(_) => {}
    }
    Ok(())
}

/// Resolve a deferred view off the UI thread.
///
/// Decoding runs on a worker thread; `latency` is slept first so the
/// placeholder path can be exercised. If the worker dies before answering
/// the future resolves to [`LoadError::Abandoned`].
pub fn fetch(
    source: DeferredSource,
    latency: Duration,
) -> impl Future<Output = Result<Arc<Content>, LoadError>> {
    let view = source.view;
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        if !latency.is_zero() {
            std::thread::sleep(latency);
        }
        let _ = tx.send(decode(source).map(Arc::new));
    });
    async move {
        match rx.await {
            Ok(result) => result,
            Err(_) => Err(LoadError::Abandoned(view)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{self, Loader};

    fn source(view: ViewId) -> DeferredSource {
        match view::resolve(view) {
            Loader::Deferred(source) => source,
            Loader::Eager(_) => panic!("{view} is eager"),
        }
    }

    // -----------------------------------------------------------------------
    // decode
    // -----------------------------------------------------------------------

    #[test]
    fn bundled_documents_decode() {
        for view in [ViewId::Skills, ViewId::About, ViewId::Projects] {
            let content = decode(source(view)).expect("bundled content decodes");
            match (view, content) {
                (ViewId::Skills, Content::Skills(s)) => assert_eq!(s.areas.len(), 3),
                (ViewId::About, Content::About(a)) => assert_eq!(a.stats.len(), 3),
                (ViewId::Projects, Content::Projects(p)) => assert_eq!(p.projects.len(), 14),
                (v, c) => panic!("{v} decoded into {c:?}"),
            }
        }
    }

    #[test]
    fn malformed_document_is_reported() {
        let bad = DeferredSource {
            view: ViewId::Skills,
            document: "{ \"areas\": [",
        };
        assert!(matches!(
            decode(bad),
            Err(LoadError::Malformed {
                view: ViewId::Skills,
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_proficiency_is_invalid() {
        let bad = DeferredSource {
            view: ViewId::Skills,
            document: r##"{"areas":[{"title":"X","badge":"X","color":"#000000","percentage":120,"skills":[]}]}"##,
        };
        assert!(matches!(decode(bad), Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn project_without_link_is_invalid() {
        let bad = DeferredSource {
            view: ViewId::Projects,
            document: r##"{"profile":"p","projects":[{"id":1,"title":"t","category":"c","description":"d","link":" ","color":"#000000"}]}"##,
        };
        assert!(matches!(decode(bad), Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn home_is_never_decoded() {
        let home = DeferredSource {
            view: ViewId::Home,
            document: "{}",
        };
        assert!(decode(home).is_err());
    }

    // -----------------------------------------------------------------------
    // fetch
    // -----------------------------------------------------------------------

    #[test]
    fn fetch_resolves_on_worker() {
        let result = futures::executor::block_on(fetch(source(ViewId::About), Duration::ZERO));
        assert!(matches!(result.as_deref(), Ok(Content::About(_))));
    }

    #[test]
    fn fetch_surfaces_decode_failure() {
        let bad = DeferredSource {
            view: ViewId::About,
            document: "not json",
        };
        let result = futures::executor::block_on(fetch(bad, Duration::from_millis(5)));
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }
}
