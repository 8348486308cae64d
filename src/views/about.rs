use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::content::{AboutContent, Stat};
use crate::views::Look;

fn stat_card<'a>(stat: &'a Stat, look: Look<'a>) -> Element<'a, Message> {
    let p = look.palette;
    container(
        column![
            text(&stat.value)
                .size(look.size(p.heading_text))
                .color(look.tint(&stat.color)),
            text(&stat.label)
                .size(look.size(p.label_text))
                .color(look.color(p.muted)),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(20)
    .center_x(Length::Fill)
    .style(p.card_style(look.alpha))
    .into()
}

pub(crate) fn view<'a>(about: &'a AboutContent, look: Look<'a>) -> Element<'a, Message> {
    let p = look.palette;
    let body_size = look.size(p.body_text);

    let bio = column![
        text(&about.headline)
            .size(look.size(p.heading_text))
            .color(look.color(p.text)),
        text(&about.intro)
            .size(body_size * 1.1)
            .color(look.color(p.text)),
        text(&about.body).size(body_size).color(look.color(p.muted)),
    ]
    .spacing(16)
    .max_width(720.0);

    let stats = row(about.stats.iter().map(|s| stat_card(s, look))).spacing(16);

    scrollable(
        container(column![bio, stats].spacing(32).max_width(720.0)).center_x(Length::Fill),
    )
    .into()
}
