use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    domain::{
        routing::ScreenArea,
        shell_state::ShellState,
        ui_state::{AppMode, UiStoreHandle},
    },
    infra::config::UiConfig,
};

use super::{parallax, styles};

pub fn render(frame: &mut Frame<'_>, state: &ShellState, store: &UiStoreHandle, ui: &UiConfig) {
    let area = frame.area();
    let header_rows = parallax::header_rows(state.scroll_y(), ui.header_height)
        .min(area.height.saturating_sub(2));

    let [header_area, body_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

    if header_rows > 0 {
        render_header(frame, header_area, store);
    }
    render_body(frame, body_area, state, store);

    let status = Paragraph::new(truncate_to_width(
        &status_line(state, store),
        usize::from(status_area.width),
    ))
    .style(styles::status_style());
    frame.render_widget(status, status_area);

    if store.voice_input_visible() {
        render_voice_overlay(frame, area, store);
    }
    if store.restaurant_search_visible() {
        render_search_overlay(frame, area);
    }
    if store.mode_selector_visible() {
        render_mode_selector(frame, area, store.app_mode());
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, store: &UiStoreHandle) {
    let (title, style) = match store.active_group_info() {
        Some(info) => (
            format!("{} ({} members)", info.name, info.members),
            Style::default().bg(styles::group_color(&info.color)),
        ),
        None => ("kondate".to_owned(), Style::default()),
    };

    let header = Paragraph::new(Line::from(Span::styled(
        title,
        styles::header_title_style(),
    )))
    .alignment(Alignment::Center)
    .style(style)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame<'_>, area: Rect, state: &ShellState, store: &UiStoreHandle) {
    let location = state.nav().current();
    let mut lines: Vec<Line<'_>> = Vec::new();

    match (location.area(), location.path().as_str()) {
        (ScreenArea::Auth, _) => {
            lines.push(Line::styled("Sign in", styles::header_title_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "You are signed out. Press i to sign in.",
                styles::body_text_style(),
            ));
        }
        (ScreenArea::Main, "/groups") => {
            lines.push(Line::styled("Groups", styles::header_title_style()));
            lines.push(Line::raw(""));
            match store.active_group_info() {
                Some(info) => lines.push(Line::styled(
                    format!("Active: {} ({} members)", info.name, info.members),
                    styles::body_text_style(),
                )),
                None => lines.push(Line::styled(
                    "No group selected. Press g to pick one.",
                    styles::body_text_style(),
                )),
            }
        }
        (ScreenArea::Main, _) => {
            lines.push(Line::styled("Home", styles::header_title_style()));
            lines.push(Line::raw(""));
            let voice_text = store.voice_text();
            if voice_text.is_empty() {
                lines.push(Line::styled(
                    "What are we eating? Press v to speak.",
                    styles::body_text_style(),
                ));
            } else {
                lines.push(Line::styled(
                    format!("Last request: {voice_text}"),
                    styles::body_text_style(),
                ));
            }
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "v voice  s search  m mode  g group  1/2/3 screens  j/k scroll  q quit",
        styles::hint_style(),
    ));

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

fn render_voice_overlay(frame: &mut Frame<'_>, area: Rect, store: &UiStoreHandle) {
    let popup = centered_rect(area, 60, 50);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line<'_>> = Vec::new();
    let voice_text = store.voice_text();
    if voice_text.is_empty() {
        lines.push(Line::styled("Listening...", styles::hint_style()));
    } else {
        lines.push(Line::styled(voice_text, styles::body_text_style()));
    }

    let descriptions = store.voice_tag_descriptions();
    for tag in store.voice_tags() {
        let line = match descriptions.get(&tag) {
            Some(description) => format!("#{tag}: {description}"),
            None => format!("#{tag}"),
        };
        lines.push(Line::styled(line, styles::tag_style()));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::overlay_border_style())
            .title("Voice input"),
    );
    frame.render_widget(widget, popup);
}

fn render_search_overlay(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(area, 60, 40);
    frame.render_widget(Clear, popup);

    let widget = Paragraph::new(Line::styled(
        "Search restaurants near the group...",
        styles::body_text_style(),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::overlay_border_style())
            .title("Restaurant search"),
    );
    frame.render_widget(widget, popup);
}

fn render_mode_selector(frame: &mut Frame<'_>, area: Rect, current: AppMode) {
    let popup = centered_rect(area, 40, 30);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'_>> = [AppMode::Normal, AppMode::Voice, AppMode::Group]
        .into_iter()
        .map(|mode| {
            let marker = if mode == current { ">" } else { " " };
            let key = match mode {
                AppMode::Normal => "n",
                AppMode::Voice => "v",
                AppMode::Group => "g",
            };
            Line::styled(
                format!("{marker} {key}  {}", mode.as_label()),
                if mode == current {
                    styles::header_title_style()
                } else {
                    styles::body_text_style()
                },
            )
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::overlay_border_style())
            .title("Mode"),
    );
    frame.render_widget(widget, popup);
}

fn status_line(state: &ShellState, store: &UiStoreHandle) -> String {
    let user = match &state.session().user {
        _ if state.session().loading => "resolving...".to_owned(),
        Some(user) => user.as_str().to_owned(),
        None => "signed out".to_owned(),
    };

    let group = store
        .active_group_info()
        .map(|info| info.name)
        .unwrap_or_else(|| "no group".to_owned());

    format!(
        " {user} | mode:{} | {group} | {} | scroll:{}",
        store.app_mode().as_label(),
        state.nav().current().path(),
        state.scroll_y(),
    )
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(area);

    let [_, popup, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(vertical);

    popup
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        result.push(ch);
    }

    result
}
