use super::plot::{plot_dimensions, truncate_label, AxisDomain, PlotLayout};
use crate::domain::RelatedWord;
use std::f64::consts::PI;

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 66.0;
const MARGIN_BOTTOM: f64 = 40.0;

const RELATED_FILL: &str = "#8884d8";
const TARGET_FILL: &str = "#ff7300";
const TARGET_LABEL_FILL: &str = "#d95f00";
const LABEL_FILL: &str = "#555";
const GRID_STROKE: &str = "#e0e0e0";
const AXIS_STROKE: &str = "#999";

struct Frame {
    width: f64,
    height: f64,
    x: AxisDomain,
    y: AxisDomain,
}

impl Frame {
    fn plot_width(&self) -> f64 {
        self.width - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.height - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn px(&self, x: f64) -> f64 {
        MARGIN_LEFT + self.x.fraction(x) * self.plot_width()
    }

    // SVG y grows downwards.
    fn py(&self, y: f64) -> f64 {
        MARGIN_TOP + (1.0 - self.y.fraction(y)) * self.plot_height()
    }
}

/// Renders the layout as a standalone SVG document.
pub fn render_svg(layout: &PlotLayout<'_>, requested_width: u32) -> String {
    let (width, height) = plot_dimensions(requested_width);
    let frame = Frame {
        width: width as f64,
        height: height as f64,
        x: layout.x_domain,
        y: layout.y_domain,
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">\n"
    ));
    out.push_str(&format!(
        "<title>Related words for {}</title>\n",
        escape_xml(layout.target_word)
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#f8fafc\"/>\n");

    render_grid(&mut out, &frame);
    render_legend(&mut out, &frame, !layout.target.is_empty());

    out.push_str("<g class=\"related\">\n");
    for word in &layout.related {
        render_related(&mut out, &frame, word);
    }
    out.push_str("</g>\n");

    if !layout.target.is_empty() {
        out.push_str("<g class=\"target\">\n");
        for word in &layout.target {
            render_target(&mut out, &frame, word);
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn render_grid(out: &mut String, frame: &Frame) {
    let left = MARGIN_LEFT;
    let right = frame.width - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = frame.height - MARGIN_BOTTOM;

    out.push_str("<g class=\"grid\">\n");
    for tick in ticks(frame.x) {
        let x = frame.px(tick);
        out.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{top:.1}\" x2=\"{x:.1}\" y2=\"{bottom:.1}\" stroke=\"{GRID_STROKE}\" stroke-dasharray=\"3 3\"/>\n"
        ));
        out.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#666\" text-anchor=\"middle\">{}</text>\n",
            bottom + 14.0,
            format_tick(tick)
        ));
    }
    for tick in ticks(frame.y) {
        let y = frame.py(tick);
        out.push_str(&format!(
            "<line x1=\"{left:.1}\" y1=\"{y:.1}\" x2=\"{right:.1}\" y2=\"{y:.1}\" stroke=\"{GRID_STROKE}\" stroke-dasharray=\"3 3\"/>\n"
        ));
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#666\" text-anchor=\"end\">{}</text>\n",
            left - 6.0,
            y + 3.0,
            format_tick(tick)
        ));
    }
    out.push_str(&format!(
        "<rect x=\"{left:.1}\" y=\"{top:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"{AXIS_STROKE}\"/>\n",
        frame.plot_width(),
        frame.plot_height()
    ));
    out.push_str(&format!(
        "<text x=\"{right:.1}\" y=\"{:.1}\" font-size=\"12\" fill=\"{LABEL_FILL}\" text-anchor=\"end\">X</text>\n",
        frame.height - 6.0
    ));
    out.push_str(&format!(
        "<text x=\"14\" y=\"{:.1}\" font-size=\"12\" fill=\"{LABEL_FILL}\" transform=\"rotate(-90 14 {:.1})\" text-anchor=\"middle\">Y</text>\n",
        top + frame.plot_height() / 2.0,
        top + frame.plot_height() / 2.0
    ));
    out.push_str("</g>\n");
}

fn render_legend(out: &mut String, frame: &Frame, with_target: bool) {
    let center = frame.width / 2.0;
    out.push_str("<g class=\"legend\" font-size=\"12\">\n");
    out.push_str(&format!(
        "<circle cx=\"{:.1}\" cy=\"24\" r=\"4\" fill=\"{RELATED_FILL}\"/>\n<text x=\"{:.1}\" y=\"28\" fill=\"{LABEL_FILL}\">related words</text>\n",
        center - 110.0,
        center - 100.0
    ));
    if with_target {
        out.push_str(&format!(
            "<polygon points=\"{}\" fill=\"{TARGET_FILL}\"/>\n<text x=\"{:.1}\" y=\"28\" fill=\"{LABEL_FILL}\">target word</text>\n",
            star_points(center + 20.0, 24.0, 6.0),
            center + 30.0
        ));
    }
    out.push_str("</g>\n");
}

fn render_related(out: &mut String, frame: &Frame, word: &RelatedWord) {
    let cx = frame.px(word.x);
    let cy = frame.py(word.y);
    out.push_str(&format!(
        "<g><title>{}</title><circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"4\" fill=\"{RELATED_FILL}\"/><text x=\"{cx:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"{LABEL_FILL}\" text-anchor=\"middle\">{}</text></g>\n",
        tooltip(word),
        cy - 8.0,
        escape_xml(&truncate_label(&word.word))
    ));
}

fn render_target(out: &mut String, frame: &Frame, word: &RelatedWord) {
    let cx = frame.px(word.x);
    let cy = frame.py(word.y);
    out.push_str(&format!(
        "<g><title>{}</title><polygon points=\"{}\" fill=\"{TARGET_FILL}\"/><text x=\"{cx:.1}\" y=\"{:.1}\" font-size=\"13\" font-weight=\"bold\" fill=\"{TARGET_LABEL_FILL}\" text-anchor=\"middle\">{}</text></g>\n",
        tooltip(word),
        star_points(cx, cy, 9.0),
        cy - 12.0,
        escape_xml(&truncate_label(&word.word))
    ));
}

fn tooltip(word: &RelatedWord) -> String {
    format!(
        "{} (x: {}, y: {})",
        escape_xml(&word.word),
        format_tick(word.x),
        format_tick(word.y)
    )
}

fn star_points(cx: f64, cy: f64, outer: f64) -> String {
    let inner = outer * 0.45;
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + (i as f64) * PI / 5.0;
            format!(
                "{:.1},{:.1}",
                cx + radius * angle.cos(),
                cy + radius * angle.sin()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grid positions at a round step, roughly eight per axis.
fn ticks(domain: AxisDomain) -> Vec<f64> {
    let raw = domain.span() / 8.0;
    let step = [5.0, 10.0, 20.0, 25.0, 50.0, 100.0, 200.0, 250.0, 500.0, 1000.0]
        .into_iter()
        .find(|candidate| *candidate >= raw)
        .unwrap_or_else(|| (raw / 1000.0).ceil() * 1000.0);
    let mut tick = (domain.min / step).ceil() * step;
    let mut out = Vec::new();
    while tick <= domain.max {
        out.push(tick);
        tick += step;
    }
    out
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RelatedWordSet;

    fn technology() -> RelatedWordSet {
        RelatedWordSet::new(vec![
            RelatedWord::new("technology", 0.0, 0.0),
            RelatedWord::new("innovation", 10.0, 5.0),
            RelatedWord::new("R&D <lab>", -8.0, 12.0),
        ])
    }

    #[test]
    fn target_is_drawn_as_star() {
        let words = technology();
        let svg = render_svg(&PlotLayout::new(&words, "technology"), 800);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("<g class=\"target\">"));
        assert!(svg.contains(">technology</text>"));
        assert!(svg.contains("technology (x: 0, y: 0)"));
        assert_eq!(svg.matches(&format!("fill=\"{RELATED_FILL}\"/><text")).count(), 2);
    }

    #[test]
    fn missing_target_omits_target_group() {
        let words = technology();
        let svg = render_svg(&PlotLayout::new(&words, "biology"), 600);
        assert!(!svg.contains("<g class=\"target\">"));
        assert!(!svg.contains("target word</text>"));
        assert!(svg.contains("width=\"600\" height=\"360\""));
    }

    #[test]
    fn tiny_width_still_has_a_positive_frame() {
        let words = technology();
        let svg = render_svg(&PlotLayout::new(&words, "technology"), 10);
        assert!(svg.contains("width=\"300\" height=\"300\""));
        assert!(!svg.contains("width=\"-"));
        assert!(!svg.contains("height=\"-"));
    }

    #[test]
    fn text_is_escaped() {
        let words = technology();
        let svg = render_svg(&PlotLayout::new(&words, "technology"), 800);
        assert!(svg.contains("R&amp;D &lt;lab&gt;"));
        assert!(!svg.contains("<lab>"));
        assert_eq!(escape_xml("\"a\" & 'b'"), "&quot;a&quot; &amp; &apos;b&apos;");
    }

    #[test]
    fn origin_maps_to_plot_center() {
        let frame = Frame {
            width: 800.0,
            height: 480.0,
            x: AxisDomain { min: -60.0, max: 60.0 },
            y: AxisDomain { min: -60.0, max: 60.0 },
        };
        let cx = frame.px(0.0);
        let cy = frame.py(0.0);
        assert!((cx - (MARGIN_LEFT + frame.plot_width() / 2.0)).abs() < 1e-9);
        assert!((cy - (MARGIN_TOP + frame.plot_height() / 2.0)).abs() < 1e-9);
        assert!(frame.py(60.0) < frame.py(-60.0));
    }

    #[test]
    fn ticks_use_round_steps() {
        let ticks = ticks(AxisDomain { min: -60.0, max: 60.0 });
        assert_eq!(ticks.first(), Some(&-60.0));
        assert_eq!(ticks.last(), Some(&60.0));
        assert!(ticks.contains(&0.0));
        assert_eq!(ticks.len(), 7);
    }
}
