use serde::Deserialize;

/// Interval between spinner frames.
pub const SPINNER_TICK_MS: u64 = 80;

/// Shown in place of a view whose content failed to load.
pub const BROKEN_GLYPH: &str = "\u{2716}";

// --- Busy Indicator ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderStyle {
    Braille,
    Bounce,
    Pipe,
}

impl LoaderStyle {
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            LoaderStyle::Braille => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            LoaderStyle::Bounce => &[
                "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂",
            ],
            LoaderStyle::Pipe => &["|", "/", "-", "\\"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoaderStyle::Braille => "braille",
            LoaderStyle::Bounce => "bounce",
            LoaderStyle::Pipe => "pipe",
        }
    }
}

/// Placeholder spinner. Advances only while something is waiting on it.
pub struct Spinner {
    pub style: LoaderStyle,
    frame: usize,
}

impl Spinner {
    pub fn new(style: LoaderStyle) -> Self {
        Self { style, frame: 0 }
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % self.style.frames().len();
    }

    pub fn glyph(&self) -> &'static str {
        let frames = self.style.frames();
        frames[self.frame % frames.len()]
    }

    /// Restart from the first frame.
    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_wraps_around() {
        let mut spinner = Spinner::new(LoaderStyle::Pipe);
        let first = spinner.glyph();
        for _ in 0..LoaderStyle::Pipe.frames().len() {
            spinner.tick();
        }
        assert_eq!(spinner.glyph(), first);
    }

    #[test]
    fn tick_advances_glyph() {
        let mut spinner = Spinner::new(LoaderStyle::Braille);
        spinner.tick();
        assert_eq!(spinner.glyph(), "⠙");
        spinner.reset();
        assert_eq!(spinner.glyph(), "⠋");
    }

    #[test]
    fn every_style_has_frames() {
        for style in [LoaderStyle::Braille, LoaderStyle::Bounce, LoaderStyle::Pipe] {
            assert!(!style.frames().is_empty(), "{}", style.label());
        }
    }
}
