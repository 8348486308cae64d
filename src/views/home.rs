use iced::widget::canvas::{self, Frame, LineCap, LineJoin, Path, Stroke};
use iced::widget::{button, canvas as sketch_canvas, column, container, row, stack, text};
use iced::{Alignment, Color, Element, Length, Rectangle, Renderer, Size, Vector, mouse};

use crate::app::{Message, Shell};
use crate::content::HomeContent;
use crate::motion::path::Point;
use crate::motion::sketch::{self, MARKER_SIZE, SKETCH_BOX, STROKE_WIDTH};
use crate::motion::MarkerPose;
use crate::theme::{self, Palette};
use crate::view::ViewId;
use crate::views::Look;

const UNDERLINE_SIZE: (f32, f32) = (300.0, 100.0);

// --- Sketch Canvas ---

/// One frame of the hand-drawn underline and its pen.
struct SketchCanvas {
    runs: Vec<Vec<Point>>,
    marker: Option<MarkerPose>,
    stroke: Color,
    pen: Color,
    pen_outline: Color,
}

impl<M> canvas::Program<M> for SketchCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let sx = bounds.width / SKETCH_BOX.0;
        let sy = bounds.height / SKETCH_BOX.1;
        let to_screen = |p: Point| iced::Point::new(p.x * sx, p.y * sy);

        let stroke = Stroke::default()
            .with_color(self.stroke)
            .with_width(STROKE_WIDTH * sy)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round);
        for run in self.runs.iter().filter(|r| r.len() > 1) {
            let path = Path::new(|b| {
                b.move_to(to_screen(run[0]));
                for p in &run[1..] {
                    b.line_to(to_screen(*p));
                }
            });
            frame.stroke(&path, stroke);
        }

        if let Some(marker) = self.marker.filter(|m| m.opacity > 0.0) {
            let unit = MARKER_SIZE * sy / 24.0;
            let tip = to_screen(marker.position);
            let fill = theme::fade(self.pen, marker.opacity);
            let outline = theme::fade(self.pen_outline, marker.opacity);
            frame.with_save(|f| {
                f.translate(Vector::new(tip.x, tip.y));
                f.rotate(marker.angle - std::f32::consts::FRAC_PI_4);
                f.scale(marker.scale * unit);
                // Nib at the origin, barrel trailing along +x
                let nib = Path::new(|b| {
                    b.move_to(iced::Point::ORIGIN);
                    b.line_to(iced::Point::new(6.0, -4.0));
                    b.line_to(iced::Point::new(6.0, 4.0));
                    b.close();
                });
                let barrel = Path::rectangle(iced::Point::new(6.0, -4.0), Size::new(18.0, 8.0));
                f.fill(&barrel, fill);
                f.stroke(&barrel, Stroke::default().with_color(outline).with_width(1.5));
                f.fill(&nib, outline);
            });
        }

        vec![frame.into_geometry()]
    }
}

impl Shell {
    fn underline(&self, palette: &Palette, look: Look<'_>) -> SketchCanvas {
        let (runs, marker) = match (self.sketch.handle(), self.sketch.sample(self.now)) {
            (Some(handle), Some(frame)) => (handle.path().partial(frame.drawn), Some(frame.marker)),
            // No live sequence: draw the finished underline without the pen
            _ => (sketch::resting_underline().to_vec(), None),
        };
        SketchCanvas {
            runs,
            marker: marker.map(|m| MarkerPose {
                opacity: m.opacity * look.alpha,
                ..m
            }),
            stroke: look.color(palette.sketch),
            pen: palette.pen,
            pen_outline: palette.pen_outline,
        }
    }

    pub(crate) fn view_home<'a>(
        &'a self,
        home: &'a HomeContent,
        look: Look<'a>,
    ) -> Element<'a, Message> {
        let p = look.palette;
        let display = look.size(p.display_text);

        let highlight = stack![
            sketch_canvas(self.underline(p, look))
                .width(UNDERLINE_SIZE.0)
                .height(UNDERLINE_SIZE.1),
            container(text(home.highlight).size(display).color(look.color(p.text)))
                .center(Length::Fill),
        ]
        .width(UNDERLINE_SIZE.0)
        .height(UNDERLINE_SIZE.1);

        let headline = row![
            text(home.lead).size(display).color(look.color(p.text)),
            highlight,
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let actions = row![
            button(text(home.primary_action).size(look.size(p.body_text)))
                .padding([12, 24])
                .style(p.accent_button_style(look.alpha))
                .on_press(Message::Navigate(ViewId::Projects)),
            button(text(home.secondary_action).size(look.size(p.body_text)))
                .padding([12, 24])
                .style(p.pill_style(false))
                .on_press(Message::ToggleContact),
        ]
        .spacing(12);

        let hero = column![
            text(home.greeting)
                .size(look.size(p.heading_text))
                .color(look.color(p.muted)),
            headline,
            text(home.tagline)
                .size(look.size(p.body_text * 1.1))
                .color(look.color(p.muted))
                .width(Length::Fixed(560.0)),
            actions,
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(hero).center(Length::Fill).into()
    }
}
