use std::fmt;

use crate::content::{self, Content};

/// The closed set of top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewId {
    Home,
    Skills,
    About,
    Projects,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [ViewId::Home, ViewId::Skills, ViewId::About, ViewId::Projects];

    pub fn label(self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Skills => "Skills",
            ViewId::About => "About",
            ViewId::Projects => "Projects",
        }
    }

    /// Enter/exit motion for this view. Static per view, never computed.
    pub fn motion(self) -> Motion {
        match self {
            ViewId::Home => Motion::slide(-20.0, 0.0),
            ViewId::Skills => Motion::slide(20.0, 0.0),
            ViewId::About => Motion::zoom(0.95),
            ViewId::Projects => Motion::slide(0.0, 20.0),
        }
    }

    /// Home is the landing view and renders without a load step.
    pub fn is_eager(self) -> bool {
        matches!(self, ViewId::Home)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- Motion ---

/// Where a view rests while hidden; it travels from here to its resting
/// pose on enter and back on exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

/// Visual state of the content slot at a given visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Motion {
    const fn slide(offset_x: f32, offset_y: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            scale: 1.0,
        }
    }

    const fn zoom(scale: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale,
        }
    }

    /// `visibility` is 0.0 when fully hidden and 1.0 at rest. Values are
    /// already eased.
    pub fn pose(self, visibility: f32) -> Pose {
        let v = visibility.clamp(0.0, 1.0);
        let hidden = 1.0 - v;
        Pose {
            opacity: v,
            offset_x: self.offset_x * hidden,
            offset_y: self.offset_y * hidden,
            scale: self.scale + (1.0 - self.scale) * v,
        }
    }
}

// --- Registry ---

/// A compiled-in content document that still has to be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredSource {
    pub view: ViewId,
    pub document: &'static str,
}

pub enum Loader {
    /// Renders with zero load latency.
    Eager(Content),
    /// Must be requested and awaited before first render.
    Deferred(DeferredSource),
}

const SKILLS_DOCUMENT: &str = include_str!("../assets/content/skills.json");
const ABOUT_DOCUMENT: &str = include_str!("../assets/content/about.json");
const PROJECTS_DOCUMENT: &str = include_str!("../assets/content/projects.json");

pub fn resolve(view: ViewId) -> Loader {
    match view {
        ViewId::Home => Loader::Eager(Content::Home(content::home())),
        ViewId::Skills => Loader::Deferred(DeferredSource {
            view,
            document: SKILLS_DOCUMENT,
        }),
        ViewId::About => Loader::Deferred(DeferredSource {
            view,
            document: ABOUT_DOCUMENT,
        }),
        ViewId::Projects => Loader::Deferred(DeferredSource {
            view,
            document: PROJECTS_DOCUMENT,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_home_is_eager() {
        let eager: Vec<ViewId> = ViewId::ALL.into_iter().filter(|v| v.is_eager()).collect();
        assert_eq!(eager, vec![ViewId::Home]);
    }

    #[test]
    fn eagerness_agrees_with_registry() {
        for view in ViewId::ALL {
            let eager = matches!(resolve(view), Loader::Eager(_));
            assert_eq!(view.is_eager(), eager, "{view}");
        }
    }

    #[test]
    fn deferred_sources_name_their_view() {
        for view in ViewId::ALL {
            if let Loader::Deferred(source) = resolve(view) {
                assert_eq!(source.view, view);
                assert!(!source.document.trim().is_empty());
            }
        }
    }

    #[test]
    fn pose_is_at_rest_when_fully_visible() {
        for view in ViewId::ALL {
            let pose = view.motion().pose(1.0);
            assert_eq!(pose.opacity, 1.0);
            assert_eq!(pose.offset_x, 0.0);
            assert_eq!(pose.offset_y, 0.0);
            assert_eq!(pose.scale, 1.0);
        }
    }

    #[test]
    fn hidden_pose_uses_view_offsets() {
        let home = ViewId::Home.motion().pose(0.0);
        let skills = ViewId::Skills.motion().pose(0.0);
        let about = ViewId::About.motion().pose(0.0);
        let projects = ViewId::Projects.motion().pose(0.0);
        assert_eq!(home.offset_x, -20.0);
        assert_eq!(skills.offset_x, 20.0);
        assert_eq!(about.scale, 0.95);
        assert_eq!(projects.offset_y, 20.0);
        assert_eq!(home.opacity, 0.0);
    }

    #[test]
    fn pose_clamps_out_of_range_visibility() {
        let pose = ViewId::Skills.motion().pose(1.7);
        assert_eq!(pose.opacity, 1.0);
        let pose = ViewId::Skills.motion().pose(-0.5);
        assert_eq!(pose.opacity, 0.0);
    }
}
