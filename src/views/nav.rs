use iced::widget::{button, container, row, space, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Shell};
use crate::view::ViewId;

impl Shell {
    /// Top bar: brand, one pill per view, and the contact toggle.
    pub(crate) fn view_nav(&self) -> Element<'_, Message> {
        let p = &self.palette;
        let current = self.nav.current_view();

        let mut pills = row![].spacing(4).align_y(Alignment::Center);
        for view in ViewId::ALL {
            pills = pills.push(
                button(text(view.label()).size(p.body_text))
                    .padding([8, 18])
                    .style(p.pill_style(view == current))
                    .on_press(Message::Navigate(view)),
            );
        }

        let contact = button(text("Contact").size(p.body_text))
            .padding([8, 18])
            .style(p.pill_style(self.nav.contact_open()))
            .on_press(Message::ToggleContact);

        let brand = button(text("Moaz.").size(p.heading_text * 0.8).color(p.text))
            .padding(0)
            .style(|_theme: &iced::Theme, _status| button::Style::default())
            .on_press(Message::Navigate(ViewId::Home));

        let bar = row![brand, space::horizontal(), pills, space::horizontal(), contact]
            .align_y(Alignment::Center)
            .padding([6, 12]);

        container(container(bar).style(p.nav_style()).width(Length::Fill))
            .padding([16, 24])
            .into()
    }
}
