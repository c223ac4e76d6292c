use crate::analytics::{grand_total, SortKey};
use crate::chart::{ChartModel, Metric};
use crate::format::{format_compact, format_idr, format_kwh};
use crate::ui::app::{App, FocusPanel, CHART_METRICS};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

// Palette
const SOLAR_AMBER: Color = Color::Rgb(0xE8, 0xA8, 0x3C); // focus + selection accents
const SOLAR_GREEN: Color = Color::Rgb(0x6F, 0x9A, 0x4E); // generation series
const SOLAR_BLUE: Color = Color::Rgb(0x4E, 0x7A, 0x9A); // grid series
const SOLAR_DARK: Color = Color::Rgb(0x22, 0x2A, 0x30);
const SOLAR_SELECT_BG: Color = Color::Rgb(0xF0, 0xE2, 0xC0);
const SOLAR_MUTED: Color = Color::Rgb(0x6E, 0x6E, 0x66);

const HEADER_STYLE: Style = Style::new().fg(SOLAR_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(SOLAR_SELECT_BG)
    .fg(SOLAR_DARK)
    .add_modifier(Modifier::BOLD);
const TOTAL_STYLE: Style = Style::new().fg(SOLAR_DARK).add_modifier(Modifier::BOLD);

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),  // Header
        Constraint::Length(4),  // KPI strip
        Constraint::Min(10),    // Charts
        Constraint::Length(14), // Details + summary table
        Constraint::Length(3),  // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_kpis(frame, chunks[1], app);
    draw_charts(frame, chunks[2], app);
    draw_bottom(frame, chunks[3], app);
    draw_footer(
        frame,
        chunks[4],
        " Tab Panel | \u{2191}\u{2193} Navigate | Enter Filter | \u{2190}\u{2192} Point | n/g/u/e/s Sort | c Clear | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let (title, subtitle) = match app.selected_school() {
        Some(school) => (
            format!(" Schools Dashboard - {} ", school.school_name),
            format!("{} \u{2022} {}", school.city, school.district),
        ),
        None => (
            " Schools Dashboard - West Java ".to_string(),
            format!("Total schools tracked: {}", app.data.school_count()),
        ),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(title, HEADER_STYLE),
        Span::styled(subtitle, Style::default().fg(SOLAR_MUTED)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_kpis(frame: &mut Frame, area: Rect, app: &App) {
    let kpis = app.kpis();
    let chunks = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(area);

    let fourth = match app.selected_school() {
        Some(school) => (
            "Panel Capacity",
            format!("{} kW", school.panel_capacity_kw),
        ),
        None => ("Total Schools", app.data.school_count().to_string()),
    };

    let cells = [
        (
            "Total Generation",
            format!("{} kWh", format_kwh(kpis.energy_generated_kwh)),
        ),
        (
            "Total Usage",
            format!("{} kWh", format_kwh(kpis.energy_used_kwh)),
        ),
        ("Total Savings", format_idr(kpis.cost_saving_idr)),
        fourth,
    ];

    for (chunk, (label, value)) in chunks.iter().zip(cells) {
        let kpi = Paragraph::new(Line::from(vec![Span::styled(value, HEADER_STYLE)])).block(
            Block::default()
                .title(format!(" {label} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SOLAR_MUTED)),
        );
        frame.render_widget(kpi, *chunk);
    }
}

fn draw_charts(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    let series = app.series();
    for (i, (chunk, metric)) in chunks.iter().zip(CHART_METRICS).enumerate() {
        let model = ChartModel::new(&series, metric);
        let active = app.focus == FocusPanel::Charts && app.active_chart == i;
        draw_chart(frame, *chunk, app, &model, active);
    }
}

fn draw_chart(frame: &mut Frame, area: Rect, app: &App, model: &ChartModel, active: bool) {
    let series_color = match model.metric {
        Metric::Grid => SOLAR_BLUE,
        _ => SOLAR_GREEN,
    };

    // Tooltip line for the hovered point on the active chart
    let title = match app.hovered_point.filter(|_| active) {
        Some(i) => match model.points.get(i) {
            Some(&(_, value)) => format!(
                " {} | {}: {} {} ",
                model.metric.title(),
                model.labels.get(i).map_or("-", String::as_str),
                hover_value(model.metric, value),
                model.metric.unit(),
            ),
            None => format!(" {} ", model.metric.title()),
        },
        None => format!(" {} ", model.metric.title()),
    };

    let border_style = if active {
        Style::default().fg(SOLAR_AMBER)
    } else {
        Style::default()
    };

    let hovered: Vec<(f64, f64)> = app
        .hovered_point
        .filter(|_| active)
        .and_then(|i| model.points.get(i))
        .map(|&p| vec![p])
        .unwrap_or_default();

    let mut datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(series_color))
        .data(&model.points)];
    if !hovered.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(SOLAR_AMBER))
                .data(&hovered),
        );
    }

    // Three reference gridlines: min, midpoint, max of the padded range
    let y_labels: Vec<Span> = model
        .range
        .gridlines()
        .iter()
        .map(|&v| Span::styled(format_compact(v), Style::default().fg(SOLAR_MUTED)))
        .collect();

    let x_labels: Vec<Span> = x_axis_labels(model)
        .into_iter()
        .map(|label| Span::styled(label, Style::default().fg(SOLAR_MUTED)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, model.x_max()])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([model.range.min, model.range.max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn hover_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Saving => format_idr(value),
        _ => format_kwh(value),
    }
}

/// First, middle, and last month of the series; the terminal has no room
/// for twelve rotated labels, the hovered-point title carries the rest.
fn x_axis_labels(model: &ChartModel) -> Vec<String> {
    if model.labels.is_empty() {
        return Vec::new();
    }
    let mid = model.labels.len() / 2;
    let last = model.labels.len() - 1;
    [0, mid, last]
        .iter()
        .map(|&i| model.labels[i].clone())
        .collect()
}

fn draw_bottom(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(area);

    draw_details(frame, chunks[0], app);
    draw_summary_table(frame, chunks[1], app);
}

fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = match app.selected_school() {
        Some(school) => vec![
            detail_line("School", &school.school_name),
            detail_line("City / District", &format!("{} / {}", school.city, school.district)),
            detail_line("Address", &school.address),
            detail_line("Installation Date", &school.installation_date),
            detail_line(
                "Installation Cost",
                &format_idr(school.installation_cost),
            ),
            detail_line("Panel Capacity", &format!("{} kW", school.panel_capacity_kw)),
            detail_line(
                "Coordinates",
                &format!("{:.4}, {:.4}", school.latitude, school.longitude),
            ),
        ],
        None => vec![
            Line::from(Span::styled(
                "Select a school in the table to view details and filter all data.",
                Style::default().fg(SOLAR_MUTED),
            )),
            Line::default(),
            detail_line("Scope", "All Schools (West Java)"),
        ],
    };

    let details = Paragraph::new(lines).block(
        Block::default()
            .title(" Selected School Details ")
            .borders(Borders::ALL),
    );
    frame.render_widget(details, area);
}

fn detail_line<'a>(key: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{key:<18}"), Style::default().fg(SOLAR_MUTED)),
        Span::raw(value.to_string()),
    ])
}

fn draw_summary_table(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == FocusPanel::Table;
    let rows_data = app.sorted_rows();
    let total = grand_total(&rows_data);

    let header = Row::new(vec![
        format!("school_name {}", app.sort_icon(SortKey::Name)),
        format!("generated {}", app.sort_icon(SortKey::Generated)),
        format!("used {}", app.sort_icon(SortKey::Used)),
        format!("grid {}", app.sort_icon(SortKey::Grid)),
        format!("saving {}", app.sort_icon(SortKey::Saving)),
    ])
    .style(HEADER_STYLE)
    .height(1);

    // borders + header + total row
    let visible_rows = (area.height as usize).saturating_sub(4);
    let scroll_offset = if app.selected_row >= visible_rows {
        app.selected_row - visible_rows + 1
    } else {
        0
    };

    let mut rows: Vec<Row> = rows_data
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, r)| {
            let selected_for_scope = app.scope.school_id() == Some(r.school_id.as_str());
            let style = if i == app.selected_row && is_focused {
                SELECTED_STYLE
            } else if selected_for_scope {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                r.school_name.clone(),
                format_kwh(r.sum_generated_kwh),
                format_kwh(r.sum_used_kwh),
                format_kwh(r.sum_grid_kwh),
                format_idr(r.sum_saving_idr),
            ])
            .style(style)
        })
        .collect();

    // Grand-total row: always global, never follows the scope
    rows.push(
        Row::new(vec![
            "Total (All schools)".to_string(),
            format_kwh(total.energy_generated_kwh),
            format_kwh(total.energy_used_kwh),
            format_kwh(total.grid_energy_kwh),
            format_idr(total.cost_saving_idr),
        ])
        .style(TOTAL_STYLE),
    );

    let widths = [
        Constraint::Percentage(32),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(14),
        Constraint::Percentage(22),
    ];

    let border_style = if is_focused {
        Style::default().fg(SOLAR_AMBER)
    } else {
        Style::default()
    };

    let scope_note = if app.scope.school_id().is_some() {
        " Charts + KPIs follow selected school \u{2022} table total is always global "
    } else {
        " Charts + KPIs follow all schools \u{2022} table total is always global "
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Schools Table ({}) ", rows_data.len()))
            .title_bottom(Line::from(scope_note).style(Style::default().fg(SOLAR_MUTED)))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(table, area);

    if rows_data.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("\u{2191}"))
            .end_symbol(Some("\u{2193}"));
        let mut scrollbar_state = ScrollbarState::new(rows_data.len()).position(app.selected_row);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(SOLAR_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
