use super::plot::PlotLayout;

/// Plain-text listing for terminals, target rows first.
pub fn render_table(layout: &PlotLayout<'_>) -> String {
    let label_width = layout
        .target
        .iter()
        .chain(layout.related.iter())
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!(
        "{}: {} words (x: {} to {}, y: {} to {})\n",
        layout.target_word,
        layout.len(),
        layout.x_domain.min,
        layout.x_domain.max,
        layout.y_domain.min,
        layout.y_domain.max
    );
    out.push_str(&format!(
        "   {:<label_width$} {:>8} {:>8}\n",
        "word", "x", "y"
    ));
    for word in &layout.target {
        out.push_str(&format!(
            " * {:<label_width$} {:>8.2} {:>8.2}\n",
            word.word, word.x, word.y
        ));
    }
    for word in &layout.related {
        out.push_str(&format!(
            "   {:<label_width$} {:>8.2} {:>8.2}\n",
            word.word, word.x, word.y
        ));
    }
    out
}
