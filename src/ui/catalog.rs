//! Catalog view: header with category menu, search input, tier filter panel,
//! paginated results list, and the status footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::i18n::{t, t_fmt, t_fmt1};
use crate::logic::{PAGE_SIZE, RESULT_CAP, page_count};
use crate::state::{AppState, Category, FilterMode, Focus};
use crate::theme::theme;
use crate::util::ellipsize;

/// Render the whole catalog view into `area`.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // category menu
            Constraint::Length(3), // search input
            Constraint::Min(5),    // body
            Constraint::Length(2), // footer
        ])
        .split(area);

    render_title(f, app, chunks[0]);
    render_menu(f, app, chunks[1]);
    render_search(f, app, chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(30)])
        .split(chunks[3]);
    render_tier_panel(f, app, body[0]);
    render_results(f, app, body[1]);

    render_footer(f, app, chunks[4]);
}

/// Heading text derived from the active filter.
fn heading(app: &AppState) -> String {
    match &app.filter {
        FilterMode::Search(q) => format!("{}: \"{}\"", t(app.lang, "home.search_results"), q),
        FilterMode::Category(c) => t(app.lang, &format!("categories.{}_title", c.key())),
        FilterMode::None => t(app.lang, "home.albion_items"),
    }
}

fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = Line::from(vec![
        Span::styled(
            heading(app),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {}: {}",
                t(app.lang, "header.language"),
                app.lang.as_tag().to_uppercase()
            ),
            Style::default().fg(th.subtext),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span> = Vec::new();
    for (i, category) in Category::ALL.iter().enumerate() {
        let active = matches!(app.filter, FilterMode::Category(c) if c == *category);
        let label = t(app.lang, &format!("header.{}", category.key()));
        spans.push(Span::styled(
            format!("[{}] ", i + 1),
            Style::default().fg(th.subtext),
        ));
        spans.push(Span::styled(
            label,
            if active {
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.text)
            },
        ));
        spans.push(Span::raw("   "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Search);
    let (content, fg) = if app.input.is_empty() {
        (t(app.lang, "header.search_placeholder"), th.subtext)
    } else {
        (app.input.clone(), th.text)
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(if focused { th.sapphire } else { th.subtext })),
        Span::styled(content, Style::default().fg(fg)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.accent } else { th.surface })),
    );
    f.render_widget(input, area);

    if focused {
        let right = area.x + area.width.saturating_sub(1);
        let x = (area.x + 3)
            .saturating_add(u16::try_from(app.input.len()).unwrap_or(u16::MAX))
            .min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_tier_panel(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Tiers);

    let mut rows: Vec<ListItem> = vec![ListItem::new(Line::from(Span::styled(
        format!(
            "{} {} {} {}",
            t(app.lang, "filter.results"),
            app.filtered.len(),
            t(app.lang, "filter.of"),
            app.items.len()
        ),
        Style::default().fg(th.subtext),
    )))];
    for (i, tier) in app.available_tiers.iter().enumerate() {
        let checked = app.selected_tiers.contains(tier);
        let cursor_here = focused && i == app.tier_cursor;
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = if cursor_here {
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
        } else if checked {
            Style::default().fg(th.green)
        } else {
            Style::default().fg(th.text)
        };
        rows.push(ListItem::new(Line::from(Span::styled(
            format!("{mark} {tier}"),
            style,
        ))));
    }
    rows.push(ListItem::new(Line::from(Span::styled(
        format!(
            "a {} · c {}",
            t(app.lang, "filter.select_all"),
            t(app.lang, "filter.clear_all")
        ),
        Style::default().fg(th.surface),
    ))));

    let list = List::new(rows).block(
        Block::default()
            .title(Span::styled(
                format!("{} · {}", t(app.lang, "filter.filters"), t(app.lang, "filter.tiers")),
                Style::default().fg(if focused { th.accent } else { th.subtext }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.accent } else { th.surface })),
    );
    f.render_widget(list, area);
}

fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Results);

    if app.loading {
        let msg = Paragraph::new(t(app.lang, "home.loading"))
            .style(Style::default().fg(th.subtext))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(msg, area);
        return;
    }
    if app.current_page().is_empty() {
        render_empty(f, app, area);
        return;
    }

    let title_width = usize::from(area.width).saturating_sub(30);
    let page = app.current_page();
    let rows: Vec<ListItem> = page
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut segs = vec![
                Span::styled(format!("{:>2} ", i + 1), Style::default().fg(th.subtext)),
                Span::styled(
                    format!("{:<3}", item.tier.as_deref().unwrap_or("--")),
                    Style::default().fg(th.yellow),
                ),
                Span::raw(" "),
                Span::styled(
                    ellipsize(item.title(app.lang), title_width),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
            ];
            segs.push(Span::styled(
                format!("  {}", item.id),
                Style::default().fg(th.subtext),
            ));
            ListItem::new(Line::from(segs))
        })
        .collect();

    let pages = page_count(app.filtered.len());
    let title = format!(
        "{} · {}",
        t_fmt1(app.lang, "home.showing_items", app.filtered.len()),
        t_fmt(app.lang, "home.page", &[&(app.page + 1), &pages])
    );
    let list = List::new(rows)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.accent } else { th.subtext }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.accent } else { th.surface })),
        )
        .highlight_style(Style::default().bg(th.surface).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_empty(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let (headline, hint) = if let Some(err) = &app.catalog_error {
        (
            t_fmt1(app.lang, "error.catalog_unavailable", err),
            t(app.lang, "empty.items_loading"),
        )
    } else if app.items.is_empty() {
        (
            t(app.lang, "empty.no_items_available"),
            t(app.lang, "empty.items_loading"),
        )
    } else {
        let hint_key = if matches!(app.filter, FilterMode::Category(_)) {
            "empty.try_other_category"
        } else {
            "empty.try_other_terms"
        };
        (
            t(app.lang, "empty.no_items_found"),
            format!(
                "{} · Esc: {}",
                t(app.lang, hint_key),
                t(app.lang, "home.clear_filters")
            ),
        )
    };
    let headline_color = if app.catalog_error.is_some() { th.red } else { th.text };
    let msg = Paragraph::new(vec![
        Line::from(Span::styled(headline, Style::default().fg(headline_color))),
        Line::from(Span::styled(hint, Style::default().fg(th.subtext))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(msg, area);
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let filtering = !matches!(app.filter, FilterMode::None) || !app.selected_tiers.is_empty();
    let counts = if app.filtered.len() >= RESULT_CAP {
        t(app.lang, "home.sorted_capped")
    } else if filtering {
        t_fmt1(app.lang, "home.filtered_from", app.items.len())
    } else {
        t_fmt1(app.lang, "home.of_total", app.items.len())
    };
    let first = Line::from(vec![
        Span::styled(counts, Style::default().fg(th.subtext)),
        Span::styled(
            format!("  ({PAGE_SIZE}/page)"),
            Style::default().fg(th.surface),
        ),
    ]);
    let second = app.notice.as_ref().map_or_else(
        || {
            let hints_key = if matches!(app.focus, Focus::Tiers) {
                "hints.tiers"
            } else {
                "hints.catalog"
            };
            Line::from(Span::styled(
                t(app.lang, hints_key),
                Style::default().fg(th.subtext),
            ))
        },
        |n| Line::from(Span::styled(n.text.clone(), Style::default().fg(th.yellow))),
    );
    f.render_widget(Paragraph::new(vec![first, second]), area);
}
