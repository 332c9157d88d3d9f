mod cell;
mod renderer;

use std::{
    io::{Stdout, Write},
    time::Instant,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

pub use cell::GridCell;
pub use renderer::{Renderer, STATUS_LINES};

use crate::{
    config::Config,
    error::AppError,
    game::{Command, Direction, GameState, SolvedBy},
    solvers::Solver,
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
}

/// Maps a key to an action; unmapped keys are ignored.
pub fn map_key(code: KeyCode) -> Option<KeyAction> {
    let command = match code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(KeyAction::Quit),
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('b') => Command::Search(Solver::Bfs),
        KeyCode::Char('d') => Command::Search(Solver::Dfs),
        KeyCode::Char('r') => Command::Reset,
        _ => return None,
    };
    Some(KeyAction::Command(command))
}

/// Writes `msg` on terminal row `row`, truncated to `width` columns.
/// `None` just clears the row.
pub fn log_terminal(
    stdout: &mut impl Write,
    row: u16,
    width: u16,
    msg: Option<StyledContent<String>>,
) -> std::io::Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    if let Some(msg) = msg {
        let (truncated, _) = msg.content().unicode_truncate(width as usize);
        queue!(
            stdout,
            style::PrintStyledContent(StyledContent::new(*msg.style(), truncated.to_string()))
        )?;
    }
    Ok(())
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        App { config }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Largest maze dimension that fits `term_size` terminal columns or rows, given the
    /// size of one glyph and the rows or columns reserved for other output.
    fn get_max_maze_size(term_size: u16, cell_size: u16, reserved: u16) -> u16 {
        // n cells need 2n + 1 glyphs
        (term_size.saturating_sub(reserved) / cell_size).saturating_sub(1) / 2
    }

    /// Fails with [`AppError::TooLarge`] if the configured maze does not fit the terminal.
    fn check_fits(&self, term_width: u16, term_height: u16) -> Result<(), AppError> {
        let max_width = App::get_max_maze_size(term_width, GridCell::CELL_WIDTH, 0);
        let max_height = App::get_max_maze_size(term_height, 1, STATUS_LINES);
        let (width, height) = (self.config.width, self.config.height);
        if width > max_width || height > max_height {
            return Err(AppError::TooLarge {
                width,
                height,
                max_width,
                max_height,
            });
        }
        Ok(())
    }

    /// Main loop: one tick per configured interval, one command per key press.
    pub fn run(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let (term_width, term_height) = terminal::size()?;
        self.check_fits(term_width, term_height)?;

        let mut game = GameState::seeded(self.config.width, self.config.height, self.config.seed)?;
        let mut renderer = Renderer::new(term_width);
        let tick = self.config.tick_duration();
        let mut next_tick = Instant::now() + tick;
        tracing::info!(
            "[app] Started {}x{} maze, tick every {:?}",
            self.config.width,
            self.config.height,
            tick
        );

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(KeyEvent {
                        code,
                        kind: KeyEventKind::Press,
                        ..
                    }) => match map_key(code) {
                        Some(KeyAction::Quit) => {
                            tracing::info!("[app] Quit requested");
                            break;
                        }
                        Some(KeyAction::Command(command)) => {
                            tracing::debug!("[app] Command {:?}", command);
                            game.on_command(command)?;
                        }
                        None => {}
                    },
                    Event::Resize(width, _) => renderer.resize(width),
                    _ => {}
                }
            }

            let now = Instant::now();
            if now >= next_tick {
                game.on_tick();
                next_tick += tick;
                if next_tick < now {
                    // Fell behind; don't try to catch up
                    next_tick = now + tick;
                }
            }

            renderer.draw(stdout, &game.snapshot())?;

            if let Some(solved_by) = game.solved_by() {
                if !App::end_screen(stdout, &renderer, &game, solved_by)? {
                    break;
                }
                game.on_command(Command::Reset)?;
                next_tick = Instant::now() + tick;
            }
        }
        tracing::info!("[app] Exiting main loop");
        Ok(())
    }

    /// Shows how the maze was solved and waits for Enter (new maze) or Esc (exit).
    /// Returns whether to keep playing.
    fn end_screen<W: crate::maze::WeightSource>(
        stdout: &mut Stdout,
        renderer: &Renderer,
        game: &GameState<W>,
        solved_by: SolvedBy,
    ) -> std::io::Result<bool> {
        let clock = game.clock();
        let headline = match (solved_by, game.score()) {
            (SolvedBy::Player, Some(score)) => format!(
                "You solved the maze in {}.{:02}s! Moves: {}, shortest: {}, wrong moves: {}.",
                clock.seconds(),
                clock.frames(),
                score.moves,
                score.optimal_moves,
                score.wrong_moves
            ),
            (SolvedBy::Player, None) => "You solved the maze!".to_string(),
            (SolvedBy::Solver(solver), _) => format!(
                "{} solved the maze in {}.{:02}s.",
                solver,
                clock.seconds(),
                clock.frames()
            ),
        };
        tracing::info!("[app] {}", headline);
        renderer.draw_message(
            stdout,
            game.maze().height(),
            format!("{} Press Enter for a new maze, or Esc to exit.", headline)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        )?;

        loop {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
                && kind == KeyEventKind::Press
            {
                match code {
                    KeyCode::Enter => return Ok(true),
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(false),
                    _ => {}
                }
            }
        }
    }
}
