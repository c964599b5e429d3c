//! Page layout for rendered articles
//!
//! Layout is computed up front as plain data so that page breaks and line
//! wrapping can be inspected and compared without parsing PDF output.

/// A4 width
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// A4 height
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const POINT_TO_MM: f32 = 0.3528;

/// Which builtin font a line is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Title,
    Body,
}

/// Typographic settings for one document
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub title_size_pt: f32,
    pub body_size_pt: f32,
    pub line_height_mm: f32,
    /// Vertical gap between title block and body
    pub title_gap_mm: f32,
    pub margin_mm: f32,
    /// Distance from the bottom edge that triggers a page break
    pub bottom_margin_mm: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            title_size_pt: 16.0,
            body_size_pt: 12.0,
            line_height_mm: 10.0,
            title_gap_mm: 10.0,
            margin_mm: 10.0,
            bottom_margin_mm: 20.0,
        }
    }
}

impl PageStyle {
    /// Estimated number of characters that fit on one line at `size_pt`
    ///
    /// Builtin Helvetica averages roughly half an em per glyph; bold runs a
    /// little wider.
    pub fn chars_per_line(&self, font: FontKind, size_pt: f32) -> usize {
        let em_factor = match font {
            FontKind::Title => 0.55,
            FontKind::Body => 0.5,
        };
        let glyph_mm = size_pt * POINT_TO_MM * em_factor;
        let usable_mm = PAGE_WIDTH_MM - 2.0 * self.margin_mm;
        ((usable_mm / glyph_mm).floor() as usize).max(1)
    }
}

/// One line of text at a fixed position
///
/// `y_mm` is the baseline measured from the bottom edge, as PDF expects.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font: FontKind,
    pub size_pt: f32,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// Lines placed on a single page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    /// Visible text of the page, one line per placed line
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lays out a title block followed by the body over as many pages as needed
///
/// Always returns at least one page.
pub fn layout_document(title: &str, body: &str, style: &PageStyle) -> Vec<PageLayout> {
    let mut cursor = Cursor::new(style);

    let title_chars = style.chars_per_line(FontKind::Title, style.title_size_pt);
    for line in wrap_text(title, title_chars) {
        cursor.place(line, FontKind::Title, style.title_size_pt);
    }

    cursor.skip(style.title_gap_mm);

    let body_chars = style.chars_per_line(FontKind::Body, style.body_size_pt);
    for line in wrap_text(body, body_chars) {
        cursor.place(line, FontKind::Body, style.body_size_pt);
    }

    cursor.finish()
}

/// Greedy word wrap
///
/// Explicit newlines always break; words longer than `max_chars` are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Hard-split words that can never fit
            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if word.is_empty() {
                continue;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };

            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }

    lines
}

/// Tracks the vertical write position across pages
struct Cursor<'a> {
    style: &'a PageStyle,
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// Top of the next line, measured from the top edge
    y_top_mm: f32,
}

impl<'a> Cursor<'a> {
    fn new(style: &'a PageStyle) -> Self {
        Self {
            style,
            pages: Vec::new(),
            current: PageLayout::default(),
            y_top_mm: style.margin_mm,
        }
    }

    fn place(&mut self, text: String, font: FontKind, size_pt: f32) {
        let line_height = self.style.line_height_mm;
        if self.y_top_mm + line_height > PAGE_HEIGHT_MM - self.style.bottom_margin_mm
            && !self.current.lines.is_empty()
        {
            self.pages.push(std::mem::take(&mut self.current));
            self.y_top_mm = self.style.margin_mm;
        }

        // Vertically centre the glyphs in the line cell
        let baseline_from_top = self.y_top_mm + line_height / 2.0 + 0.3 * size_pt * POINT_TO_MM;
        self.current.lines.push(PlacedLine {
            text,
            font,
            size_pt,
            x_mm: self.style.margin_mm,
            y_mm: PAGE_HEIGHT_MM - baseline_from_top,
        });
        self.y_top_mm += line_height;
    }

    fn skip(&mut self, gap_mm: f32) {
        self.y_top_mm += gap_mm;
    }

    fn finish(mut self) -> Vec<PageLayout> {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}
