use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Block of text placed at a cell offset inside `area`, clipped to it.
///
/// The offset may be negative or run past the edges, which is what sprites sliding across the
/// playfield need. With `ignore_whitespace` blanks are transparent.
#[derive(Debug, Default)]
pub struct MultiLine<'a> {
    lines: &'a [&'a str],
    offset: (i32, i32),
    ignore_whitespace: bool,
    style: Style,
}

impl<'a> MultiLine<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, ..Self::default() }
    }

    pub fn offset(self, x: i32, y: i32) -> Self {
        Self { offset: (x, y), ..self }
    }

    pub fn ignore_whitespace(self, ignore_whitespace: bool) -> Self {
        Self { ignore_whitespace, ..self }
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl Widget for MultiLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let (left, top) = (i32::from(area.left()), i32::from(area.top()));
        let (right, bottom) = (i32::from(area.right()), i32::from(area.bottom()));

        for (row, line) in self.lines.iter().enumerate() {
            let y = top + self.offset.1 + row as i32;
            if y < top || y >= bottom {
                continue;
            }
            for (col, c) in line.chars().enumerate() {
                let x = left + self.offset.0 + col as i32;
                if x < left || x >= right || (self.ignore_whitespace && c.is_whitespace()) {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                    cell.set_char(c).set_style(self.style);
                }
            }
        }
    }
}
