/// Number of filled cells for a percentage bar of the given width.
pub fn filled_cells(percentage: u8, width: u16) -> u16 {
    ((percentage.min(100) as u32 * width as u32) / 100) as u16
}

/// Render a fixed-width percentage bar using block glyphs.
pub fn percent_bar(percentage: u8, width: u16) -> String {
    let filled = filled_cells(percentage, width) as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width as usize - filled));
    bar
}

/// Format a rate delta against history: movement under half a point is
/// not worth showing.
pub fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) if d >= 0.5 => format!("↑{:.1}", d),
        Some(d) if d <= -0.5 => format!("↓{:.1}", d.abs()),
        Some(_) => String::new(),
        None => String::new(),
    }
}
