//! Score-trend chart: a chart-ready projection of the record list plus an
//! inline SVG area chart built from it.

use dioxus::prelude::*;

use api::InterviewRecord;

use crate::core::format;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 14.0;
const PAD_BOTTOM: f64 = 28.0;
const MAX_SCORE: f64 = 10.0;

/// One plotted question, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Running label, `Q 1`, `Q 2`, …
    pub label: String,
    pub date: String,
    pub score: f64,
    pub topic: String,
}

/// Project the full record list into plot order (earliest submission first).
pub fn chart_points(records: &[InterviewRecord]) -> Vec<ChartPoint> {
    let mut ordered: Vec<&InterviewRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.submit_time.cmp(&b.submit_time));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, record)| ChartPoint {
            label: format!("Q {}", index + 1),
            date: format::format_date(&record.submit_time),
            score: record.rating,
            topic: record.genre_name.clone(),
        })
        .collect()
}

fn point_xy(points_len: usize, index: usize, score: f64) -> (f64, f64) {
    let inner_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let inner_h = HEIGHT - PAD_TOP - PAD_BOTTOM;

    let x = if points_len <= 1 {
        PAD_LEFT
    } else {
        PAD_LEFT + inner_w * index as f64 / (points_len - 1) as f64
    };
    let y = PAD_TOP + inner_h * (1.0 - (score.clamp(0.0, MAX_SCORE) / MAX_SCORE));
    (x, y)
}

pub(crate) fn line_path(points: &[ChartPoint]) -> String {
    let mut path = String::new();
    for (index, point) in points.iter().enumerate() {
        let (x, y) = point_xy(points.len(), index, point.score);
        let op = if index == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{op}{x:.1},{y:.1} "));
    }
    path.trim_end().to_string()
}

pub(crate) fn area_path(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let baseline = HEIGHT - PAD_BOTTOM;
    let (first_x, _) = point_xy(points.len(), 0, points[0].score);
    let (last_x, _) = point_xy(points.len(), points.len() - 1, points[points.len() - 1].score);
    format!(
        "{} L{last_x:.1},{baseline:.1} L{first_x:.1},{baseline:.1} Z",
        line_path(points)
    )
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Full SVG document for the trend chart. Built as markup so the same code
/// path serves wasm and desktop webviews.
pub(crate) fn svg_markup(points: &[ChartPoint]) -> String {
    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {WIDTH} {HEIGHT}' \
         preserveAspectRatio='none' class='trend-chart__svg' role='img' \
         aria-label='Score per question over time'>\n\
         <defs><linearGradient id='scoreFill' x1='0' y1='0' x2='0' y2='1'>\
         <stop offset='5%' stop-color='#d946ef' stop-opacity='0.4'/>\
         <stop offset='95%' stop-color='#d946ef' stop-opacity='0'/>\
         </linearGradient></defs>\n"
    );

    // Horizontal grid plus y-axis labels every two points of score.
    for tick in (0..=10).step_by(2) {
        let (_, y) = point_xy(2, 0, tick as f64);
        svg.push_str(&format!(
            "<line x1='{PAD_LEFT}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}' \
             stroke='rgba(255,255,255,0.08)' stroke-dasharray='3 3'/>\n",
            WIDTH - PAD_RIGHT
        ));
        svg.push_str(&format!(
            "<text x='{:.1}' y='{:.1}' fill='#a1a1aa' font-size='11' \
             text-anchor='end'>{tick}</text>\n",
            PAD_LEFT - 8.0,
            y + 4.0
        ));
    }

    svg.push_str(&format!(
        "<path d='{}' fill='url(#scoreFill)' stroke='none'/>\n",
        area_path(points)
    ));
    svg.push_str(&format!(
        "<path d='{}' fill='none' stroke='#d946ef' stroke-width='3' \
         stroke-linejoin='round' stroke-linecap='round'/>\n",
        line_path(points)
    ));

    for (index, point) in points.iter().enumerate() {
        let (x, y) = point_xy(points.len(), index, point.score);
        // <title> provides the native hover tooltip.
        svg.push_str(&format!(
            "<circle cx='{x:.1}' cy='{y:.1}' r='3.5' fill='#d946ef'>\
             <title>{} · {} · {} ({})</title></circle>\n",
            xml_escape(&point.label),
            point.score,
            xml_escape(&point.topic),
            xml_escape(&point.date),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Performance-trend section. Hidden until there is more than one record to
/// draw a line through.
#[component]
pub fn TrendChart(points: Vec<ChartPoint>) -> Element {
    if points.len() <= 1 {
        return rsx! {};
    }

    let markup = svg_markup(&points);

    rsx! {
        section { class: "trend-chart",
            div { class: "trend-chart__title", "Performance trend (per question)" }
            div { class: "trend-chart__frame", dangerous_inner_html: "{markup}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, submit_time: &str, rating: f64, genre: &str) -> InterviewRecord {
        InterviewRecord {
            id,
            submit_time: submit_time.into(),
            genre_name: genre.into(),
            question: String::new(),
            user_answer: String::new(),
            rating,
            feedback: String::new(),
        }
    }

    #[test]
    fn points_are_projected_oldest_first() {
        let records = vec![
            record(2, "2026-02-01T10:00:00Z", 8.0, "Computer Networks"),
            record(1, "2026-01-01T10:00:00Z", 4.0, "Web development"),
        ];
        let points = chart_points(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Q 1");
        assert_eq!(points[0].topic, "Web development");
        assert_eq!(points[1].label, "Q 2");
        assert_eq!(points[1].score, 8.0);
    }

    #[test]
    fn line_path_spans_the_plot_area() {
        let records = vec![
            record(1, "2026-01-01T10:00:00Z", 0.0, "Web development"),
            record(2, "2026-02-01T10:00:00Z", 10.0, "Web development"),
        ];
        let points = chart_points(&records);
        let path = line_path(&points);
        // Score 0 sits on the baseline, score 10 at the top pad.
        assert_eq!(
            path,
            format!(
                "M{PAD_LEFT:.1},{:.1} L{:.1},{PAD_TOP:.1}",
                HEIGHT - PAD_BOTTOM,
                WIDTH - PAD_RIGHT
            )
        );
    }

    #[test]
    fn area_path_closes_to_the_baseline() {
        let records = vec![
            record(1, "2026-01-01T10:00:00Z", 5.0, "Web development"),
            record(2, "2026-02-01T10:00:00Z", 6.0, "Web development"),
        ];
        let area = area_path(&chart_points(&records));
        assert!(area.ends_with('Z'));
        assert!(area.contains(&format!("{:.1}", HEIGHT - PAD_BOTTOM)));
    }

    #[test]
    fn markup_escapes_topic_text() {
        let records = vec![
            record(1, "2026-01-01T10:00:00Z", 5.0, "C & C++ <internals>"),
            record(2, "2026-02-01T10:00:00Z", 6.0, "C & C++ <internals>"),
        ];
        let svg = svg_markup(&chart_points(&records));
        assert!(svg.contains("C &amp; C++ &lt;internals&gt;"));
        assert!(!svg.contains("<internals>"));
    }
}
