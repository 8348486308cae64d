use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::content::{Project, ProjectsContent};
use crate::util::truncate_str;
use crate::views::Look;

const CARDS_PER_ROW: usize = 3;
const DESCRIPTION_CHARS: usize = 160;

fn project_card<'a>(project: &'a Project, look: Look<'a>) -> Element<'a, Message> {
    let p = look.palette;
    let tint = look.tint(&project.color);

    let tags = row(project.tags.iter().map(|t| {
        container(text(t.as_str()).size(look.size(p.label_text)))
            .padding([3, 8])
            .style(p.chip_style(tint))
            .into()
    }))
    .spacing(6)
    .wrap();

    let card = container(
        column![
            text(&project.category)
                .size(look.size(p.label_text))
                .color(tint),
            text(&project.title)
                .size(look.size(p.body_text * 1.2))
                .color(look.color(p.text)),
            text(truncate_str(&project.description, DESCRIPTION_CHARS))
                .size(look.size(p.body_text * 0.9))
                .color(look.color(p.muted)),
            tags,
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(p.card_style(look.alpha));

    button(card)
        .padding(0)
        .width(Length::FillPortion(1))
        .style(|_theme: &iced::Theme, _status| button::Style::default())
        .on_press(Message::OpenLink(project.link.clone()))
        .into()
}

pub(crate) fn view<'a>(projects: &'a ProjectsContent, look: Look<'a>) -> Element<'a, Message> {
    let p = look.palette;

    let header = column![
        text("Projects")
            .size(look.size(p.heading_text))
            .color(look.color(p.text)),
        text("Dashboards, pipelines and analyses. Select a card to open it.")
            .size(look.size(p.body_text))
            .color(look.color(p.muted)),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let mut grid = column![].spacing(16);
    for chunk in projects.projects.chunks(CARDS_PER_ROW) {
        let mut line = row(chunk.iter().map(|pr| project_card(pr, look))).spacing(16);
        // Keep card widths even on a short last row
        for _ in chunk.len()..CARDS_PER_ROW {
            line = line.push(space::horizontal().width(Length::FillPortion(1)));
        }
        grid = grid.push(line);
    }

    let more = button(text("More on GitHub").size(look.size(p.body_text)))
        .padding([10, 22])
        .style(p.pill_style(false))
        .on_press(Message::OpenLink(projects.profile.clone()));

    scrollable(
        column![header, grid, more]
            .spacing(28)
            .align_x(Alignment::Center)
            .padding([0, 8]),
    )
    .into()
}
