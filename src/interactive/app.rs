//! TUI application state and logic

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::core::Word;
use crate::round::{Outcome, Round, SubmitError};
use crate::wordlists::WordSource;

/// Application state
///
/// The round state is the single source of truth for game progress; the app
/// only adds the in-flight row buffer, cursor, and transient messages.
pub struct App<'a> {
    pub round: Round<'a>,
    source: &'a WordSource,
    forced_target: Option<Word>,
    /// Cells of the active attempt row; `None` marks an unfilled position
    pub row_buffer: Vec<Option<char>>,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(round: Round<'a>, source: &'a WordSource, forced_target: Option<Word>) -> Self {
        let width = round.state().target().len();
        Self {
            round,
            source,
            forced_target,
            row_buffer: vec![None; width],
            cursor: 0,
            messages: vec![Message {
                text: "Type your guess, Enter to submit. Ctrl-N: new round, Esc: quit."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Typing,
            should_quit: false,
        }
    }

    /// Place a letter at the cursor and advance if not at the last cell
    pub fn type_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        self.row_buffer[self.cursor] = Some(c.to_ascii_uppercase());
        if self.cursor < self.row_buffer.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Clear the cursor cell and step left (Backspace)
    pub fn erase_letter(&mut self) {
        self.row_buffer[self.cursor] = None;
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Clear the cursor cell without moving (Delete)
    pub fn clear_cell(&mut self) {
        self.row_buffer[self.cursor] = None;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.row_buffer.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Submit the active row to the round controller
    ///
    /// Unfilled cells make the joined string too short, which the controller
    /// rejects as an incomplete guess without touching round state.
    pub fn submit_row(&mut self) {
        let raw: String = self.row_buffer.iter().flatten().collect();

        match self.round.submit(&raw) {
            Ok(report) => {
                self.row_buffer = vec![None; self.round.state().target().len()];
                self.cursor = 0;

                match &report.outcome {
                    Outcome::Won(attempts) => {
                        self.input_mode = InputMode::GameOver;
                        let plural = if *attempts == 1 { "guess" } else { "guesses" };
                        self.add_message(
                            &format!("🎉 Won in {attempts} {plural}!"),
                            MessageStyle::Success,
                        );
                        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::Lost(target) => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("❌ Out of attempts. The word was {target}."),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::InProgress => {
                        let remaining = self.round.state().attempts_remaining();
                        self.add_message(
                            &format!("{remaining} attempts remaining"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(SubmitError::IncompleteGuess) => {
                self.add_message("Fill every cell before submitting!", MessageStyle::Error);
            }
            Err(SubmitError::NotAWord) => {
                self.add_message("Not a word in the lexicon!", MessageStyle::Error);
            }
            Err(SubmitError::GameOver) => {
                // Unreachable while input is gated on InputMode
            }
        }
    }

    /// Abandon the current round and start a fresh one
    pub fn new_round(&mut self) {
        let target = if let Some(word) = &self.forced_target {
            Some(word.clone())
        } else {
            self.source.draw(&mut rand::rng()).cloned()
        };

        let Some(target) = target else {
            self.add_message("Word source is empty!", MessageStyle::Error);
            return;
        };

        self.round.restart(target);
        self.row_buffer = vec![None; self.round.state().target().len()];
        self.cursor = 0;
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round();
                    }
                    _ => {
                        // Round is over; ignore everything else
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.type_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.erase_letter();
                    }
                    KeyCode::Delete => {
                        app.clear_cell();
                    }
                    KeyCode::Left => {
                        app.move_left();
                    }
                    KeyCode::Right | KeyCode::Tab => {
                        app.move_right();
                    }
                    KeyCode::Enter => {
                        app.submit_row();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::GameConfig;
    use crate::wordlists::{Lexicon, WordSource};

    fn fixtures() -> (Lexicon, WordSource) {
        let lexicon = Lexicon::from_words(["horse", "otter", "house"]);
        let source = WordSource::from_categories([("animals", vec!["horse"])]);
        (lexicon, source)
    }

    fn app<'a>(lexicon: &'a Lexicon, source: &'a WordSource) -> App<'a> {
        let round = Round::new(lexicon, GameConfig::default(), Word::new("horse").unwrap());
        App::new(round, source, None)
    }

    #[test]
    fn typing_fills_cells_and_advances() {
        let (lexicon, source) = fixtures();
        let mut app = app(&lexicon, &source);

        app.type_letter('h');
        app.type_letter('o');
        assert_eq!(app.row_buffer[0], Some('H'));
        assert_eq!(app.row_buffer[1], Some('O'));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn cursor_stops_at_last_cell() {
        let (lexicon, source) = fixtures();
        let mut app = app(&lexicon, &source);

        for c in "horse".chars() {
            app.type_letter(c);
        }
        assert_eq!(app.cursor, 4);

        // Typing at the last cell overwrites in place
        app.type_letter('x');
        assert_eq!(app.row_buffer[4], Some('X'));
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn erase_steps_left_clear_stays() {
        let (lexicon, source) = fixtures();
        let mut app = app(&lexicon, &source);

        app.type_letter('h');
        app.type_letter('o');
        app.erase_letter();
        assert_eq!(app.row_buffer[2], None);
        assert_eq!(app.cursor, 1);

        app.clear_cell();
        assert_eq!(app.row_buffer[1], None);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn incomplete_row_does_not_consume_attempt() {
        let (lexicon, source) = fixtures();
        let mut app = app(&lexicon, &source);

        app.type_letter('h');
        app.submit_row();
        assert_eq!(app.round.state().attempt_index(), 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn winning_row_switches_to_game_over() {
        let (lexicon, source) = fixtures();
        let mut app = app(&lexicon, &source);

        for c in "horse".chars() {
            app.type_letter(c);
        }
        app.submit_row();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.round.state().outcome(), &Outcome::Won(1));
        assert!(app.row_buffer.iter().all(Option::is_none));
    }

    #[test]
    fn new_round_resets_everything() {
        let (lexicon, source) = fixtures();
        let mut app = app(&lexicon, &source);

        for c in "horse".chars() {
            app.type_letter(c);
        }
        app.submit_row();
        app.new_round();

        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.round.state().attempt_index(), 0);
        assert_eq!(app.cursor, 0);
        assert!(app.row_buffer.iter().all(Option::is_none));
    }
}
