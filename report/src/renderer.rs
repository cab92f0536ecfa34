//! HTML rendering of the report page.
//!
//! Every function returns a fragment of markup; [`render_page`] wraps the
//! body in the document shell. All text taken from data is escaped.

use crate::model::{BoundForm, Chart, DistanceRow, StatCard};

/// SVG canvas size and plot margins.
const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 44.0;
const AXIS_TICKS: u64 = 5;

/// Wraps `body` in the full HTML document.
pub fn render_page(title: &str, body: &str, css_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{css_url}">
</head>
<body>
<header class="site-header">
<span class="site-logo">Prime Distance Plotter</span>
</header>
<main id="main-content" class="container">
<div class="intro">
<h1>Prime Distance Plotter</h1>
<p class="muted">Explore the patterns in the distribution of prime numbers and the distances between consecutive primes.</p>
</div>
{body}
</main>
</body>
</html>
"##,
        title = escape_html(title),
        css_url = escape_html(css_url),
        body = body,
    )
}

/// The bound form: numeric field, range slider, and submit button.
pub fn render_calculator(form: &BoundForm, found: Option<usize>) -> String {
    let found_html = match found {
        Some(n) => format!(
            "<p class=\"muted\">Found {} prime numbers</p>\n",
            group_thousands(n as u64)
        ),
        None => String::new(),
    };
    format!(
        r##"<section class="card calculator" aria-labelledby="calculator-title">
<h2 id="calculator-title">Prime Number Calculator</h2>
<form method="get" action="{action}">
<label for="max-input">Maximum Number: {value_label}</label>
<input id="max-input" name="max" type="number" value="{value}" min="{min}" max="{max}" step="{step}">
<input id="max-range" type="range" value="{value}" min="{min}" max="{max}" step="{step}" aria-label="Maximum number" oninput="document.getElementById('max-input').value=this.value">
<div class="range-labels"><span>{min_label}</span><span>{max_label}</span></div>
<button type="submit">Calculate Primes</button>
</form>
{found_html}</section>
"##,
        action = escape_html(&form.action),
        value = form.value,
        value_label = group_thousands(form.value),
        min = form.min,
        max = form.max,
        step = form.step,
        min_label = group_thousands(form.min),
        max_label = group_thousands(form.max),
        found_html = found_html,
    )
}

/// Scatter plot of (prime, distance) as inline SVG.
pub fn render_chart(chart: &Chart) -> String {
    if chart.points.is_empty() {
        return "<section class=\"card chart empty\">\n<p class=\"muted\">No data to display</p>\n</section>\n"
            .to_string();
    }

    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let x_of = |v: u64| MARGIN_LEFT + scale(v, chart.max_x) * plot_w;
    let y_of = |v: u64| MARGIN_TOP + plot_h - scale(v, chart.max_y) * plot_h;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" role=\"img\" aria-label=\"Distance from previous prime for each prime up to {}\">\n",
        chart.max_x
    ));

    // Grid and tick labels
    for tick in ticks(chart.max_x) {
        let x = x_of(tick);
        svg.push_str(&format!(
            "<line class=\"grid\" x1=\"{x:.1}\" y1=\"{MARGIN_TOP}\" x2=\"{x:.1}\" y2=\"{:.1}\"/>\n<text class=\"tick\" x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{tick}</text>\n",
            MARGIN_TOP + plot_h,
            MARGIN_TOP + plot_h + 18.0,
        ));
    }
    for tick in ticks(chart.max_y) {
        let y = y_of(tick);
        svg.push_str(&format!(
            "<line class=\"grid\" x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\"/>\n<text class=\"tick\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{tick}</text>\n",
            MARGIN_LEFT + plot_w,
            MARGIN_LEFT - 8.0,
            y + 4.0,
        ));
    }
    svg.push_str(&format!(
        "<text class=\"axis-label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">Prime Number</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        CHART_HEIGHT - 6.0,
    ));
    svg.push_str(&format!(
        "<text class=\"axis-label\" x=\"14\" y=\"{:.1}\" text-anchor=\"middle\" transform=\"rotate(-90 14 {:.1})\">Distance</text>\n",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0,
    ));

    for p in &chart.points {
        svg.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"rgba(37, 99, 235, {:.3})\"><title>Prime: {}, distance from previous: {}</title></circle>\n",
            x_of(p.prime),
            y_of(p.distance),
            p.opacity,
            p.prime,
            p.distance,
        ));
    }
    svg.push_str("</svg>\n");

    format!(
        "<section class=\"card chart\">\n<h2>Prime Distance Distribution</h2>\n{svg}</section>\n"
    )
}

/// The three summary cards.
pub fn render_stat_cards(cards: &[StatCard]) -> String {
    let mut html = String::from("<section class=\"stat-grid\">\n");
    for card in cards {
        html.push_str(&format!(
            "<div class=\"card stat\">\n<h3>{}</h3>\n<p class=\"stat-value\">{}</p>\n<p class=\"muted small\">{}</p>\n</div>\n",
            escape_html(&card.title),
            escape_html(&card.value),
            escape_html(&card.description),
        ));
    }
    html.push_str("</section>\n");
    html
}

/// Top distances table with a percentage bar per row.
///
/// `distinct` is the number of different distances in the full distribution.
pub fn render_top_distances(rows: &[DistanceRow], limit: usize, distinct: usize) -> String {
    if rows.is_empty() {
        return "<section class=\"card top-distances\">\n<h2>Top Distance Distribution</h2>\n<p class=\"muted\">No data available</p>\n</section>\n"
            .to_string();
    }

    let mut body = String::new();
    for row in rows {
        let pct = format!("{:.1}", row.percentage);
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><span class=\"bar\"><span style=\"width: {pct}%\"></span></span>{pct}%</td></tr>\n",
            row.distance,
            group_thousands(row.count as u64),
        ));
    }

    format!(
        r##"<section class="card top-distances">
<h2>Top {limit} Distance Distribution</h2>
<table>
<thead><tr><th scope="col">Distance</th><th scope="col">Count</th><th scope="col">Percentage</th></tr></thead>
<tbody>
{body}</tbody>
</table>
<p class="muted small">Distribution of distances between consecutive prime numbers</p>
<p class="muted small">Showing top {shown} of {distinct} different distances</p>
</section>
"##,
        shown = limit.min(rows.len()),
    )
}

/// Static explanation shown at the bottom of the page.
pub fn render_about() -> String {
    r##"<section class="card about">
<h2>About Prime Numbers</h2>
<p class="muted">Prime numbers are natural numbers greater than 1 that cannot be formed by multiplying two smaller natural numbers. A prime number is divisible only by 1 and itself.</p>
<p class="muted">The distribution of prime numbers among the natural numbers is not regular. However, there are patterns in how they are distributed and in the distances between consecutive primes, which this visualization explores.</p>
</section>
"##
    .to_string()
}

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formats `n` with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `v / max` in [0, 1]; 0 when the axis is degenerate.
fn scale(v: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        (v as f64 / max as f64).min(1.0)
    }
}

/// Evenly spaced integer ticks from 0 to `max`, without duplicates.
fn ticks(max: u64) -> Vec<u64> {
    let mut out: Vec<u64> = (0..=AXIS_TICKS)
        .map(|i| (u128::from(max) * u128::from(i) / u128::from(AXIS_TICKS)) as u64)
        .collect();
    out.dedup();
    out
}
