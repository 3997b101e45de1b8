use super::common::render_dialog_scrollbar;
use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
FINVANI - MSME News Sentiment Dashboard
=======================================

NAVIGATION
----------
Tab / →     Next view
Shift+Tab / ←  Previous view
1 2 3       Dashboard, Live Feed, Sentiment Tester
Esc         Close dialogs and pickers

LIVE FEED
---------
j/k ↓↑      Move through headlines
l           Choose headline language
r           Trigger ingestion and reload
s           Show ingestion status

SENTIMENT TESTER
----------------
Type        Edit the headline to analyze
Enter       Analyze the text
Ctrl+U      Clear the input

GENERAL
-------
?           Toggle this help
G           Show logs
q           Quit (outside the tester input)
Ctrl+C      Quit

INDICATORS
----------
● System Online     Backend answered the last health check
● Backend Offline   Last health check failed
POSITIVE / NEUTRAL / NEGATIVE  Model label with confidence

Only the first 10 headlines of each load are analyzed.

Press 'Esc', '?' or 'h' to close this help panel
";

/// Info and error dialogs share one layout; only the title and color differ
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflowing = lines.len() > visible_height;
    let message_text = scroll.window(&lines, visible_height).join("\n");

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflowing {
        render_dialog_scrollbar(f, content_area, &mut scroll.state);
    }
}

fn render_scrolling_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let overflowing = lines.len() > visible_height;
    let text = scroll.window(&lines, visible_height).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if overflowing {
        render_dialog_scrollbar(f, content_area, &mut scroll.state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_scrolling_panel(f, area, "📖 Help - Press 'Esc', '?' or 'h' to close", HELP_CONTENT, scroll);
}

/// Logs arrive newest first
pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll) {
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrolling_panel(f, area, DIALOG_TITLE_DEBUG_LOGS, &content, scroll);
}
