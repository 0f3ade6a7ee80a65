use chat_core::{AppViewModel, MessageNode, Role};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;

/// Draws one frame and returns how many rows the message list can scroll
/// back from the newest line at this size.
pub fn render(frame: &mut Frame, view: &AppViewModel) -> u16 {
    let areas = layout::split(frame.area());

    let max_scroll_back = render_messages(frame, areas.messages, view);
    render_input(frame, areas.input, view);
    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().add_modifier(Modifier::DIM)),
        areas.help,
    );

    if let Some(notice) = &view.notice {
        render_notice(frame, notice);
    }
    max_scroll_back
}

fn render_messages(frame: &mut Frame, area: Rect, view: &AppViewModel) -> u16 {
    let block = Block::bordered().title(TITLE_MESSAGES);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = view.messages.iter().flat_map(message_lines).collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    // scroll_back counts rows up from the bottom; clamp it to the content.
    let total = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    let bottom = total.saturating_sub(inner.height);
    let offset = bottom.saturating_sub(view.scroll_back);

    frame.render_widget(paragraph.scroll((offset, 0)), inner);
    bottom
}

fn message_lines(message: &MessageNode) -> Vec<Line<'_>> {
    let (prefix, color) = match message.role {
        Role::User => (USER_PREFIX, USER_COLOR),
        Role::Bot => (BOT_PREFIX, BOT_COLOR),
    };
    let prefix_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = message
        .text
        .lines()
        .enumerate()
        .map(|(i, part)| {
            let lead = if i == 0 {
                Span::styled(prefix, prefix_style)
            } else {
                Span::raw(CONTINUATION_INDENT)
            };
            Line::from(vec![lead, Span::styled(part, Style::default().fg(color))])
        })
        .collect();
    lines.push(Line::default());
    lines
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::bordered().title(TITLE_INPUT);
    let inner = block.inner(area);
    let line = Line::from(vec![Span::raw(INPUT_PROMPT), Span::raw(view.input.as_str())]);
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);

    // Keep the caret visible once the text outgrows the box.
    let overflow = width.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(line).scroll((0, overflow)).block(block), area);

    if view.notice.is_none() && inner.width > 0 && inner.height > 0 {
        let x = inner.x + width.saturating_sub(overflow).min(inner.width - 1);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_notice(frame: &mut Frame, notice: &str) {
    let area = layout::centered_rect(60, 30, frame.area());
    let body = vec![
        Line::from(notice),
        Line::default(),
        Line::from(Span::styled(
            NOTICE_HINT,
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let popup = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .title(TITLE_NOTICE)
            .style(Style::default().fg(NOTICE_COLOR)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
