use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use crate::tui::app::{App, Speaker};
use crate::tui::widgets::task_list::TaskListWidget;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Transcript + tasks
            Constraint::Length(3), // Input
        ].as_ref())
        .split(f.area());

    let header = Paragraph::new(" DUKE   [F1] Help  [Esc] Quit ")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(chunks[1]);

    render_transcript(f, app, body[0]);
    f.render_widget(TaskListWidget::new(app.duke.tasks()), body[1]);
    render_input(f, app, chunks[2]);

    if app.show_help {
        render_help(f);
    }
}

fn render_transcript(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Conversation ");
    let messages_area = block.inner(area);
    f.render_widget(block, area);

    let width = messages_area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for msg in &app.transcript {
        let (role, color) = match msg.speaker {
            Speaker::User => ("You", Color::Cyan),
            Speaker::Duke => ("Duke", Color::Green),
            Speaker::Error => ("Duke", Color::Red),
        };

        lines.push(Line::from(Span::styled(
            format!("{}:", role),
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        )));

        for raw in msg.content.lines() {
            for line in textwrap::wrap(raw, width.saturating_sub(2).max(1)) {
                lines.push(Line::from(Span::raw(format!("  {}", line))));
            }
        }
        lines.push(Line::from(""));
    }

    let height = messages_area.height as usize;
    let total_lines = lines.len();
    let max_scroll = total_lines.saturating_sub(height) as u16;

    if app.auto_scroll || app.scroll >= max_scroll {
        app.scroll = max_scroll;
    }

    let messages = Paragraph::new(lines).scroll((app.scroll, 0));
    f.render_widget(messages, messages_area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input_area = area.inner(Margin { vertical: 0, horizontal: 1 });
    let input_block = Block::default()
        .borders(Borders::TOP)
        .title(" Command (PgUp/PgDn to scroll, Ctrl+U clear) ");

    let input = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block);
    f.render_widget(input, input_area);

    let cursor_x = input_area.x + app.input.width() as u16;
    let cursor_y = input_area.y + 1;
    f.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(1)), cursor_y));
}

fn render_help(f: &mut Frame) {
    let help_area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(Span::styled("Commands", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("todo [description]"),
        Line::from("deadline [description] /by yyyy-MM-dd HHmm"),
        Line::from("event [description] /at yyyy-MM-dd HHmm"),
        Line::from("list | find [keyword]"),
        Line::from("done [n] | delete [n]"),
        Line::from("help [command] | bye"),
        Line::from(""),
        Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("PgUp/PgDn    Scroll conversation"),
        Line::from("End          Resume auto-scroll"),
        Line::from("Ctrl+W       Delete word"),
        Line::from("Ctrl+U       Clear input"),
        Line::from("Esc          Quit"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(Color::DarkGray))),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .alignment(Alignment::Left);
    f.render_widget(help, help_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
