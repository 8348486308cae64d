use iced::widget::text::Shaping;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Shell};
use crate::gate::Resolved;
use crate::loader::BROKEN_GLYPH;
use crate::view::ViewId;

impl Shell {
    /// Stand-in for a deferred view: a spinner while loading, a broken
    /// glyph with the reason once the load has failed.
    pub(crate) fn view_placeholder(&self, view: ViewId) -> Element<'_, Message> {
        let p = &self.palette;
        let (glyph, color, caption) = match self.gate.resolved(view) {
            Resolved::Failed(e) => (BROKEN_GLYPH, p.error, format!("{view} could not be loaded: {e}")),
            Resolved::Loading | Resolved::Ready(_) => {
                (self.spinner.glyph(), p.muted, format!("Loading {}\u{2026}", view.label()))
            }
        };

        let body = column![
            text(glyph)
                .size(p.heading_text)
                .color(color)
                .shaping(Shaping::Advanced),
            text(caption).size(p.label_text).color(p.muted),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        container(body).center(Length::Fill).into()
    }
}
