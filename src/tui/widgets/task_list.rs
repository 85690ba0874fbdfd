use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use crate::models::store::TaskList;
use crate::models::task::TaskKind;

/// Side panel listing every task with its 1-based number.
pub struct TaskListWidget<'a> {
    pub title: String,
    pub tasks: &'a TaskList,
}

impl<'a> TaskListWidget<'a> {
    pub fn new(tasks: &'a TaskList) -> Self {
        let title = format!(" Tasks ({}) ", tasks.size());
        Self { title, tasks }
    }
}

impl<'a> Widget for TaskListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        block.render(area, buf);

        let inner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if self.tasks.is_empty() {
            let line = Line::from(Span::styled("No tasks yet.", Style::default().fg(Color::DarkGray)));
            buf.set_line(inner_area.x, inner_area.y, &line, inner_area.width);
            return;
        }

        for (i, task) in self.tasks.iter().enumerate() {
            if i >= inner_area.height as usize {
                break;
            }

            let task_style = if task.is_done {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                match task.kind {
                    TaskKind::Todo => Style::default().fg(Color::White),
                    TaskKind::Deadline { .. } => Style::default().fg(Color::Red),
                    TaskKind::Event { .. } => Style::default().fg(Color::Blue),
                }
            };

            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(task.to_string(), task_style),
            ]);

            buf.set_line(inner_area.x, inner_area.y + i as u16, &line, inner_area.width);
        }
    }
}
