use crate::duke::{Duke, GREETING};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Duke,
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub speaker: Speaker,
    pub content: String,
}

pub enum CurrentScreen {
    Main,
    Exiting,
}

pub struct App<'a> {
    pub duke: &'a mut Duke,
    pub current_screen: CurrentScreen,
    pub transcript: Vec<Message>,
    pub input: String,
    pub scroll: u16,
    pub auto_scroll: bool,
    pub show_help: bool,
}

impl<'a> App<'a> {
    pub fn new(duke: &'a mut Duke) -> App<'a> {
        App {
            duke,
            current_screen: CurrentScreen::Main,
            transcript: vec![Message {
                speaker: Speaker::Duke,
                content: GREETING.to_string(),
            }],
            input: String::new(),
            scroll: 0,
            auto_scroll: true,
            show_help: false,
        }
    }

    /// Send the current input line to Duke and record both sides.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() {
            return;
        }

        self.transcript.push(Message {
            speaker: Speaker::User,
            content: line.clone(),
        });

        let reply = self.duke.respond(&line);
        self.transcript.push(Message {
            speaker: if reply.is_error { Speaker::Error } else { Speaker::Duke },
            content: reply.message,
        });
        self.auto_scroll = true;

        if reply.is_exit {
            self.current_screen = CurrentScreen::Exiting;
        }
    }

    /// Remove the last word of the input, keeping the separating space.
    pub fn delete_word(&mut self) {
        if let Some(last_space) = self.input.trim_end().rfind(' ') {
            self.input.truncate(last_space + 1);
        } else {
            self.input.clear();
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }
}

pub fn run(duke: &mut Duke) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(duke);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| crate::tui::ui::ui(f, app))?;

        if let CurrentScreen::Exiting = app.current_screen {
            return Ok(());
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(true) = crate::tui::handlers::handle_key_events(event, app) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_both_sides() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        let mut app = App::new(&mut duke);

        app.input = "todo read book ".to_string();
        app.submit();
        assert!(app.input.is_empty());
        assert_eq!(app.transcript.len(), 3);
        assert_eq!(app.transcript[1].speaker, Speaker::User);
        assert_eq!(app.transcript[1].content, "todo read book ");
        assert_eq!(app.transcript[2].speaker, Speaker::Duke);

        app.input = "done".to_string();
        app.submit();
        assert_eq!(app.transcript[4].speaker, Speaker::Error);
        assert_eq!(app.duke.tasks().size(), 1);
    }

    #[test]
    fn test_leading_space_reaches_parser() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        let mut app = App::new(&mut duke);
        app.input = "  list".to_string();
        app.submit();
        assert_eq!(app.transcript[2].speaker, Speaker::Error);
        assert_eq!(app.transcript[2].content, "Sorry, I don't understand that command...");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        let mut app = App::new(&mut duke);
        app.input = "   ".to_string();
        app.submit();
        assert_eq!(app.transcript.len(), 1);
    }

    #[test]
    fn test_bye_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        let mut app = App::new(&mut duke);
        app.input = "bye".to_string();
        app.submit();
        assert!(matches!(app.current_screen, CurrentScreen::Exiting));
    }

    #[test]
    fn test_delete_word() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        let mut app = App::new(&mut duke);
        app.input = "todo read book".to_string();
        app.delete_word();
        assert_eq!(app.input, "todo read ");
        app.input = "todo".to_string();
        app.delete_word();
        assert!(app.input.is_empty());
    }
}
