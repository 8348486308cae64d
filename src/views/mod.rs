mod about;
mod contact;
mod home;
mod nav;
mod placeholder;
mod projects;
mod skills;

use iced::widget::{column, container, stack, text};
use iced::{Color, Element, Length, Padding};

use crate::app::{Message, Shell};
use crate::content::Content;
use crate::gate::Resolved;
use crate::theme::{self, Palette};
use crate::transition::Presentation;
use crate::view::Pose;

const SLOT_PADDING: f32 = 32.0;

/// Palette plus the transition pose a view is being drawn at.
#[derive(Clone, Copy)]
pub(crate) struct Look<'a> {
    pub(crate) palette: &'a Palette,
    pub(crate) alpha: f32,
    pub(crate) scale: f32,
}

impl<'a> Look<'a> {
    pub(crate) fn at_rest(palette: &'a Palette) -> Self {
        Self {
            palette,
            alpha: 1.0,
            scale: 1.0,
        }
    }

    fn posed(palette: &'a Palette, pose: Pose) -> Self {
        Self {
            palette,
            alpha: pose.opacity,
            scale: pose.scale,
        }
    }

    pub(crate) fn color(&self, color: Color) -> Color {
        theme::fade(color, self.alpha)
    }

    pub(crate) fn size(&self, size: f32) -> f32 {
        size * self.scale
    }

    /// Accent from a content document, falling back to the palette accent.
    pub(crate) fn tint(&self, hex: &str) -> Color {
        self.color(theme::parse_hex(hex).unwrap_or(self.palette.accent))
    }
}

/// Shift `content` by the pose offset using asymmetric padding.
fn offset(content: Element<'_, Message>, pose: Pose) -> Element<'_, Message> {
    container(content)
        .padding(Padding {
            top: pose.offset_y.max(0.0),
            bottom: (-pose.offset_y).max(0.0),
            left: pose.offset_x.max(0.0),
            right: (-pose.offset_x).max(0.0),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

impl Shell {
    pub(crate) fn view_shell(&self) -> Element<'_, Message> {
        let page = column![
            self.view_nav(),
            container(self.view_slot())
                .padding(SLOT_PADDING)
                .width(Length::Fill)
                .height(Length::Fill),
            self.view_footer(),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = stack![page];
        if let Some(chat) = self.view_chat_button() {
            layers = layers.push(chat);
        }
        if self.nav.contact_open() {
            layers = layers.push(self.view_contact());
        }
        layers.into()
    }

    fn view_slot(&self) -> Element<'_, Message> {
        match self.transition.presentation(self.now) {
            Presentation::Blank => column![].width(Length::Fill).height(Length::Fill).into(),
            Presentation::Placeholder(view) => self.view_placeholder(view),
            Presentation::View { view, visibility } => {
                let pose = view.motion().pose(visibility);
                let look = Look::posed(&self.palette, pose);
                let body = match self.gate.resolved(view) {
                    Resolved::Ready(Content::Home(home)) => self.view_home(home, look),
                    Resolved::Ready(Content::Skills(skills)) => skills::view(skills, look),
                    Resolved::Ready(Content::About(about)) => about::view(about, look),
                    Resolved::Ready(Content::Projects(projects)) => projects::view(projects, look),
                    Resolved::Loading | Resolved::Failed(_) => self.view_placeholder(view),
                };
                offset(body, pose)
            }
        }
    }

    fn view_footer(&self) -> Element<'_, Message> {
        let p = &self.palette;
        let stamp = format!(
            "\u{00a9} Moaz Shaker  v{} ({})",
            env!("FOLIO_VERSION"),
            env!("FOLIO_COMMIT")
        );
        container(text(stamp).size(p.label_text).color(p.muted))
            .center_x(Length::Fill)
            .padding(12)
            .into()
    }
}
