pub mod multiline;
pub mod scene;

/// Symbols of `buf`, one string per row.
#[cfg(test)]
pub(crate) fn rows(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    (buf.area.top()..buf.area.bottom())
        .map(|y| {
            (buf.area.left()..buf.area.right())
                .map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()).unwrap_or_default())
                .collect()
        })
        .collect()
}
