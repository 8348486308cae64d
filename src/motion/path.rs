use nom::{
    bytes::complete::take_while,
    character::complete::one_of,
    combinator::{all_consuming, map},
    multi::many1,
    number::complete::float,
    sequence::{pair, preceded, terminated},
    IResult,
};

use crate::error::PathError;

/// Subdivisions per cubic when flattening.
const CUBIC_STEPS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }

    fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

// --- Path data grammar ---

#[derive(Debug, Clone, PartialEq)]
enum Command {
    MoveTo { relative: bool, points: Vec<Point> },
    LineTo { relative: bool, points: Vec<Point> },
    Horizontal { relative: bool, values: Vec<f32> },
    Vertical { relative: bool, values: Vec<f32> },
    CubicTo { relative: bool, points: Vec<Point> },
    Close,
}

fn separator(i: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == ',')(i)
}

fn number(i: &str) -> IResult<&str, f32> {
    preceded(separator, float)(i)
}

fn point(i: &str) -> IResult<&str, Point> {
    map(pair(number, number), |(x, y)| Point::new(x, y))(i)
}

fn command(i: &str) -> IResult<&str, Command> {
    let (i, letter) = preceded(separator, one_of("MmLlHhVvCcZz"))(i)?;
    let relative = letter.is_ascii_lowercase();
    match letter.to_ascii_uppercase() {
        'M' => map(many1(point), move |points| Command::MoveTo { relative, points })(i),
        'L' => map(many1(point), move |points| Command::LineTo { relative, points })(i),
        'H' => map(many1(number), move |values| Command::Horizontal { relative, values })(i),
        'V' => map(many1(number), move |values| Command::Vertical { relative, values })(i),
        'C' => map(many1(point), move |points| Command::CubicTo { relative, points })(i),
        _ => Ok((i, Command::Close)),
    }
}

fn commands(d: &str) -> Result<Vec<Command>, PathError> {
    all_consuming(terminated(many1(command), separator))(d)
        .map(|(_, cmds)| cmds)
        .map_err(|e| PathError::Syntax(e.to_string()))
}

// --- Measured geometry ---

#[derive(Debug, Clone, Copy, PartialEq)]
struct Piece {
    from: Point,
    to: Point,
    /// Distance along the path where this piece begins.
    start: f32,
    len: f32,
}

/// A path flattened into straight pieces with cumulative lengths, so it can
/// be measured, sampled, and partially drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredPath {
    pieces: Vec<Piece>,
    length: f32,
}

struct Builder {
    pieces: Vec<Piece>,
    length: f32,
    cursor: Point,
    subpath_start: Point,
}

impl Builder {
    fn line(&mut self, to: Point) {
        let len = self.cursor.distance(to);
        if len > f32::EPSILON {
            self.pieces.push(Piece {
                from: self.cursor,
                to,
                start: self.length,
                len,
            });
            self.length += len;
        }
        self.cursor = to;
    }

    fn cubic(&mut self, c1: Point, c2: Point, to: Point) {
        let p0 = self.cursor;
        for step in 1..=CUBIC_STEPS {
            let t = step as f32 / CUBIC_STEPS as f32;
            let u = 1.0 - t;
            let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
            self.line(Point::new(
                a * p0.x + b * c1.x + c * c2.x + d * to.x,
                a * p0.y + b * c1.y + c * c2.y + d * to.y,
            ));
        }
    }

    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative { self.cursor.offset(p) } else { p }
    }
}

impl MeasuredPath {
    /// Parse SVG path data (M, L, H, V, C, Z in either case) and measure it.
    pub fn parse(d: &str) -> Result<Self, PathError> {
        let mut b = Builder {
            pieces: Vec::new(),
            length: 0.0,
            cursor: Point::new(0.0, 0.0),
            subpath_start: Point::new(0.0, 0.0),
        };

        for cmd in commands(d)? {
            match cmd {
                Command::MoveTo { relative, points } => {
                    let mut points = points.into_iter();
                    if let Some(first) = points.next() {
                        b.cursor = b.resolve(first, relative);
                        b.subpath_start = b.cursor;
                    }
                    // Extra pairs after a move are implicit line-tos
                    for p in points {
                        let to = b.resolve(p, relative);
                        b.line(to);
                    }
                }
                Command::LineTo { relative, points } => {
                    for p in points {
                        let to = b.resolve(p, relative);
                        b.line(to);
                    }
                }
                Command::Horizontal { relative, values } => {
                    for x in values {
                        let x = if relative { b.cursor.x + x } else { x };
                        b.line(Point::new(x, b.cursor.y));
                    }
                }
                Command::Vertical { relative, values } => {
                    for y in values {
                        let y = if relative { b.cursor.y + y } else { y };
                        b.line(Point::new(b.cursor.x, y));
                    }
                }
                Command::CubicTo { relative, points } => {
                    if points.len() % 3 != 0 {
                        return Err(PathError::Syntax(format!(
                            "cubic needs coordinate triples, got {} pairs",
                            points.len()
                        )));
                    }
                    for triple in points.chunks(3) {
                        let c1 = b.resolve(triple[0], relative);
                        let c2 = b.resolve(triple[1], relative);
                        let to = b.resolve(triple[2], relative);
                        b.cubic(c1, c2, to);
                    }
                }
                Command::Close => {
                    let start = b.subpath_start;
                    b.line(start);
                }
            }
        }

        if b.pieces.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self {
            pieces: b.pieces,
            length: b.length,
        })
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn start(&self) -> Point {
        self.pieces[0].from
    }

    fn piece_at(&self, distance: f32) -> (&Piece, f32) {
        let d = distance.clamp(0.0, self.length);
        let idx = self
            .pieces
            .partition_point(|p| p.start + p.len < d)
            .min(self.pieces.len() - 1);
        let piece = &self.pieces[idx];
        let t = ((d - piece.start) / piece.len).clamp(0.0, 1.0);
        (piece, t)
    }

    /// Point at `distance` along the path, clamped to its ends.
    pub fn point_at(&self, distance: f32) -> Point {
        let (piece, t) = self.piece_at(distance);
        piece.from.lerp(piece.to, t)
    }

    /// Direction of travel at `distance`, in radians.
    pub fn angle_at(&self, distance: f32) -> f32 {
        let (piece, _) = self.piece_at(distance);
        (piece.to.y - piece.from.y).atan2(piece.to.x - piece.from.x)
    }

    /// The first `distance` units of the path, one point run per connected
    /// stretch.
    pub fn partial(&self, distance: f32) -> Vec<Vec<Point>> {
        let mut runs: Vec<Vec<Point>> = Vec::new();
        if distance <= 0.0 {
            return runs;
        }
        for piece in &self.pieces {
            if piece.start >= distance {
                break;
            }
            let end = if piece.start + piece.len <= distance {
                piece.to
            } else {
                piece.from.lerp(piece.to, (distance - piece.start) / piece.len)
            };
            match runs.last_mut() {
                Some(run) if run.last() == Some(&piece.from) => run.push(end),
                _ => runs.push(vec![piece.from, end]),
            }
        }
        runs
    }
}
