use iced::widget::{column, container, row, scrollable, space, text};
use iced::{Alignment, Background, Border, Color, Element, Length};

use crate::app::Message;
use crate::content::{SkillArea, SkillsContent};
use crate::theme::fade;
use crate::views::Look;

const METER_HEIGHT: f32 = 8.0;

fn chip<'a>(label: &'a str, tint: Color, look: Look<'a>) -> Element<'a, Message> {
    container(text(label).size(look.size(look.palette.label_text)))
        .padding([4, 10])
        .style(look.palette.chip_style(tint))
        .into()
}

/// Proficiency bar split into filled and empty portions.
fn meter<'a>(percentage: u8, tint: Color, look: Look<'a>) -> Element<'a, Message> {
    let filled = u16::from(percentage.min(100));
    let bar = |portion: u16, color: Color| {
        container(space::horizontal())
            .width(Length::FillPortion(portion.max(1)))
            .height(METER_HEIGHT)
            .style(move |_theme: &iced::Theme| container::Style {
                background: Some(Background::Color(color)),
                border: Border {
                    radius: (METER_HEIGHT / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            })
    };
    let track = fade(look.palette.muted, 0.2 * look.alpha);
    let mut r = row![].width(Length::Fill);
    if filled > 0 {
        r = r.push(bar(filled, tint));
    }
    if filled < 100 {
        r = r.push(bar(100 - filled, track));
    }
    r.into()
}

fn area_card<'a>(area: &'a SkillArea, look: Look<'a>) -> Element<'a, Message> {
    let p = look.palette;
    let tint = look.tint(&area.color);

    let header = row![
        text(&area.title)
            .size(look.size(p.body_text * 1.2))
            .color(look.color(p.text)),
        space::horizontal(),
        chip(&area.badge, tint, look),
    ]
    .align_y(Alignment::Center);

    let level = row![
        text("Proficiency")
            .size(look.size(p.label_text))
            .color(look.color(p.muted)),
        space::horizontal(),
        text(format!("{}%", area.percentage))
            .size(look.size(p.label_text))
            .color(tint),
    ];

    let skills = row(area.skills.iter().map(|s| chip(s, tint, look)))
        .spacing(6)
        .wrap();

    container(
        column![header, level, meter(area.percentage, tint, look), skills].spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(p.card_style(look.alpha))
    .into()
}

pub(crate) fn view<'a>(skills: &'a SkillsContent, look: Look<'a>) -> Element<'a, Message> {
    let p = look.palette;

    let title = column![
        text("My Skills")
            .size(look.size(p.heading_text))
            .color(look.color(p.text)),
        text("Tools and disciplines I use to turn raw data into decisions.")
            .size(look.size(p.body_text))
            .color(look.color(p.muted)),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let areas = row(skills.areas.iter().map(|a| area_card(a, look))).spacing(16);

    let mut page = column![title, areas].spacing(28).align_x(Alignment::Center);
    if !skills.tools.is_empty() {
        let tools = row(skills
            .tools
            .iter()
            .map(|t| chip(&t.name, look.tint(&t.color), look)))
        .spacing(8)
        .wrap();
        page = page.push(
            column![
                text("Tools & Technologies")
                    .size(look.size(p.body_text * 1.2))
                    .color(look.color(p.text)),
                tools,
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        );
    }

    scrollable(container(page).center_x(Length::Fill)).into()
}
