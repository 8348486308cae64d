use iced::widget::{button, column, container, opaque, row, space, svg, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Shell};
use crate::views::Look;

const CHAT_ICON: &[u8] = include_bytes!("../../assets/icons/chat.svg");
const CHAT_ICON_SIZE: f32 = 26.0;

fn entry<'a>(look: Look<'a>, label: &'static str, value: &'a str, url: String) -> Element<'a, Message> {
    let p = look.palette;
    row![
        text(label).size(p.label_text).color(p.muted).width(80.0),
        button(text(value).size(p.body_text))
            .padding([6, 12])
            .style(p.pill_style(false))
            .on_press(Message::OpenLink(url)),
    ]
    .align_y(Alignment::Center)
    .into()
}

impl Shell {
    /// Contact panel over the page while `contact_open` is set.
    pub(crate) fn view_contact(&self) -> Element<'_, Message> {
        let p = &self.palette;
        let look = Look::at_rest(p);
        let links = &self.settings.contact;

        let mut entries = column![].spacing(8);
        if let Some(email) = &links.email {
            entries = entries.push(entry(look, "Email", email, format!("mailto:{email}")));
        }
        if let Some(phone) = &links.phone {
            entries = entries.push(entry(look, "Phone", phone, format!("tel:{phone}")));
        }
        if let Some(github) = &links.github {
            entries = entries.push(entry(look, "GitHub", github, github.clone()));
        }

        let header = row![
            text("Get In Touch").size(p.heading_text).color(p.text),
            space::horizontal(),
            button(text("\u{2715}").size(p.body_text))
                .padding([6, 12])
                .style(p.pill_style(false))
                .on_press(Message::ToggleContact),
        ]
        .align_y(Alignment::Center);

        let card = container(
            column![
                header,
                text("Have a dataset that needs a story? Reach out.")
                    .size(p.body_text)
                    .color(p.muted),
                entries,
            ]
            .spacing(16),
        )
        .padding(28)
        .max_width(480.0)
        .style(p.card_style(look.alpha));

        opaque(
            container(card)
                .center(Length::Fill)
                .style(p.overlay_style()),
        )
    }

    /// Floating chat trigger. Independent of navigation state; hidden when
    /// no chat link is configured.
    pub(crate) fn view_chat_button(&self) -> Option<Element<'_, Message>> {
        let url = self.settings.contact.chat_url.clone()?;
        let icon = svg(svg::Handle::from_memory(CHAT_ICON))
            .width(CHAT_ICON_SIZE)
            .height(CHAT_ICON_SIZE);
        let trigger = button(icon)
            .padding(14)
            .style(self.palette.accent_button_style(1.0))
            .on_press(Message::OpenLink(url));
        Some(
            container(trigger)
                .align_right(Length::Fill)
                .align_bottom(Length::Fill)
                .padding(24)
                .into(),
        )
    }
}
