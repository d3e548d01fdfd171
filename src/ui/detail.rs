//! Item detail view: localized info block, range/location selectors, and the
//! price-history chart.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};

use crate::catalog::item_image_url;
use crate::i18n::t;
use crate::state::{AppState, DetailState};
use crate::theme::{location_color, theme};

/// Render the whole detail view into `area`.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let Some(detail) = app.detail.clone() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // info block
            Constraint::Length(1), // selectors
            Constraint::Min(8),    // chart
            Constraint::Length(1), // hints
        ])
        .split(area);

    render_info(f, app, &detail, chunks[0]);
    render_selectors(f, app, &detail, chunks[1]);
    render_chart(f, app, &detail, chunks[2]);

    let th = theme();
    f.render_widget(
        Paragraph::new(Span::styled(
            t(app.lang, "hints.detail"),
            Style::default().fg(th.subtext),
        )),
        chunks[3],
    );
}

fn render_info(f: &mut Frame, app: &AppState, detail: &DetailState, area: Rect) {
    let th = theme();
    let item = &detail.item;
    let mut lines = vec![
        Line::from(Span::styled(
            item.title(app.lang).to_string(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{}: ", t(app.lang, "detail.tier")), Style::default().fg(th.subtext)),
            Span::styled(
                item.tier.clone().unwrap_or_else(|| "--".to_string()),
                Style::default().fg(th.yellow),
            ),
            Span::styled(format!("   {}: ", t(app.lang, "detail.id")), Style::default().fg(th.subtext)),
            Span::styled(item.id.clone(), Style::default().fg(th.text)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t(app.lang, "detail.image")), Style::default().fg(th.subtext)),
            Span::styled(item_image_url(&item.id), Style::default().fg(th.sapphire)),
        ]),
    ];
    let description = item.description(app.lang);
    if !description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t(app.lang, "card.description").to_uppercase(),
            Style::default().fg(th.subtext),
        )));
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(th.text),
        )));
    }
    let info = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface)),
    );
    f.render_widget(info, area);
}

fn render_selectors(f: &mut Frame, app: &AppState, detail: &DetailState, area: Rect) {
    let th = theme();
    let location = app.detail_location();
    let location_label = location
        .map_or_else(|| t(app.lang, "detail.all_locations"), str::to_string);
    let line = Line::from(vec![
        Span::styled(format!("{}: ", t(app.lang, "detail.range")), Style::default().fg(th.subtext)),
        Span::styled(
            t(app.lang, detail.range.label_key()),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}: ", t(app.lang, "detail.location")),
            Style::default().fg(th.subtext),
        ),
        Span::styled(
            location_label,
            Style::default()
                .fg(location_color(location))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_chart(f: &mut Frame, app: &AppState, detail: &DetailState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            t(app.lang, "detail.price_trends"),
            Style::default().fg(th.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface));

    if detail.loading {
        let msg = Paragraph::new(t(app.lang, "detail.loading"))
            .style(Style::default().fg(th.subtext))
            .block(block);
        f.render_widget(msg, area);
        return;
    }
    let series = &detail.series;
    if series.is_empty() {
        let msg = Paragraph::new(t(app.lang, "detail.no_data"))
            .style(Style::default().fg(th.subtext))
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    let points: Vec<(f64, f64)> = series
        .prices_avg
        .iter()
        .enumerate()
        .map(|(i, &p)| (i as f64, p))
        .collect();
    let min_y = series.prices_avg.iter().copied().fold(f64::INFINITY, f64::min) * 0.98;
    let max_y = series
        .prices_avg
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
        * 1.02;
    let max_x = points.len().saturating_sub(1).max(1) as f64;

    let location = app.detail_location();
    let series_color = location_color(location);
    let name = format!(
        "{} · {}",
        t(app.lang, "detail.avg_price"),
        location.map_or_else(|| t(app.lang, "detail.all_locations"), str::to_string)
    );
    let datasets = vec![
        Dataset::default()
            .name(name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(series_color))
            .data(&points),
    ];

    let first_ts = series.timestamps.first().cloned().unwrap_or_default();
    let last_ts = series.timestamps.last().cloned().unwrap_or_default();
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(th.subtext))
                .bounds([0.0, max_x])
                .labels(vec![Span::raw(first_ts), Span::raw(last_ts)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(th.subtext))
                .bounds([min_y, max_y])
                .labels(vec![
                    Span::raw(format!("{min_y:.0}")),
                    Span::raw(format!("{max_y:.0}")),
                ]),
        );
    f.render_widget(chart, area);
}
