use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::Story;
use crate::utils::sanitize_line;

pub const LOADING_TEXT: &str = "Loading ...";
pub const ERROR_TEXT: &str = "Something went wrong ...";

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const DANGER: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs from the app for one frame
pub struct RenderState<'a> {
    pub search_term: &'a str,
    pub stories: &'a [&'a Story],
    pub selected_idx: usize,
    pub total_count: usize,
    pub is_loading: bool,
    pub is_error: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_input(frame, layout.search_area, state.search_term);

    if state.is_loading {
        render_loading(frame, layout.results_area);
        render_details(frame, layout.details_area, None);
    } else {
        let list_area = if state.is_error {
            let (banner_area, rest) = AppLayout::with_banner(layout.results_area);
            render_error_banner(frame, banner_area);
            rest
        } else {
            layout.results_area
        };
        render_story_list(frame, list_area, state.stories, state.selected_idx);
        render_details(frame, layout.details_area, state.stories.get(state.selected_idx).copied());
    }

    render_status_bar(frame, layout.status_area, state);
}

/// Search box; the cursor is placed at the end of the term so input is focused from the start
fn render_search_input(frame: &mut Frame, area: Rect, search_term: &str) {
    let input = Paragraph::new(search_term).style(Style::default().fg(BRIGHT)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Search: "),
    );
    frame.render_widget(input, area);

    if area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let cursor_x = (area.x + 1).saturating_add(search_term.chars().count() as u16).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(LOADING_TEXT)
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)));
    frame.render_widget(paragraph, area);
}

fn render_error_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(ERROR_TEXT)
        .style(Style::default().fg(DANGER).add_modifier(Modifier::BOLD));
    frame.render_widget(banner, area);
}

fn render_story_list(frame: &mut Frame, area: Rect, stories: &[&Story], selected_idx: usize) {
    let items: Vec<ListItem> = stories
        .iter()
        .enumerate()
        .map(|(idx, story)| {
            let content = format!(
                "{} | {} | {} comments | {} points",
                sanitize_line(&story.title),
                sanitize_line(&story.author),
                story.num_comments,
                story.points
            );

            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Stories "),
    );

    frame.render_widget(list, area);
}

fn render_details(frame: &mut Frame, area: Rect, story: Option<&Story>) {
    let content = if let Some(story) = story {
        let field = |label: &'static str, value: String| {
            Line::from(vec![Span::styled(label, Style::default().fg(MUTED)), Span::raw(value)])
        };

        Text::from(vec![
            Line::from(Span::styled(
                sanitize_line(&story.title),
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field("URL: ", sanitize_line(&story.url)),
            field("Author: ", sanitize_line(&story.author)),
            field("Comments: ", story.num_comments.to_string()),
            field("Points: ", story.points.to_string()),
            field("ID: ", story.object_id.to_string()),
        ])
    } else {
        Text::from("No story selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Details "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let base = Style::default().fg(BRIGHT).bg(BAR_BG);

    let (status_text, style) = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => DANGER,
        };
        (format!(" {} ", message.text), Style::default().fg(color).bg(BAR_BG))
    } else if state.is_loading {
        (" Loading stories | Ctrl+C: quit ".to_string(), base)
    } else {
        let mut parts = vec![];

        if state.stories.len() < state.total_count {
            parts.push(format!("{}/{} stories", state.stories.len(), state.total_count));
        } else {
            parts.push(format!("{} stories", state.total_count));
        }

        if !state.stories.is_empty() {
            parts.push(format!("story {}/{}", state.selected_idx + 1, state.stories.len()));
            parts.push("Del: remove".to_string());
        }

        if !state.search_term.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), base)
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
