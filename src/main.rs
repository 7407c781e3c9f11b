//! Terminal runner (default binary).
//!
//! Event-driven: each key event runs to completion before the next is read.
//! The only timer is the transient toast expiry, handled via the poll
//! timeout.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_triad::core::{combo_multiplier, GameSession};
use tui_triad::input::{handle_key_event, should_quit};
use tui_triad::term::{GameView, TerminalRenderer, Viewport};
use tui_triad::types::{GameAction, GRID_CELLS, GRID_WIDTH, MESSAGE_TIMEOUT_MS};

/// Transient message shown in place of the key legend.
struct Toast {
    text: String,
    expires_at: Instant,
}

impl Toast {
    fn new(text: String) -> Self {
        Self {
            text,
            expires_at: Instant::now() + Duration::from_millis(MESSAGE_TIMEOUT_MS),
        }
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::with_random_seed();
    session.start();

    let view = GameView::default();
    let mut cursor: usize = GRID_CELLS / 2;
    let mut toast: Option<Toast> = None;

    loop {
        if toast
            .as_ref()
            .is_some_and(|t| Instant::now() >= t.expires_at)
        {
            toast = None;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(
            &session,
            cursor,
            toast.as_ref().map(|t| t.text.as_str()),
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        // Wake up in time to expire the toast even without input.
        let timeout = toast
            .as_ref()
            .map(|t| t.expires_at.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(&mut session, &mut cursor, &mut toast, action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
    }
}

fn apply_action(
    session: &mut GameSession,
    cursor: &mut usize,
    toast: &mut Option<Toast>,
    action: GameAction,
) {
    match action {
        GameAction::CursorLeft => {
            if *cursor % GRID_WIDTH > 0 {
                *cursor -= 1;
            }
        }
        GameAction::CursorRight => {
            if *cursor % GRID_WIDTH < GRID_WIDTH - 1 {
                *cursor += 1;
            }
        }
        GameAction::CursorUp => {
            if *cursor >= GRID_WIDTH {
                *cursor -= GRID_WIDTH;
            }
        }
        GameAction::CursorDown => {
            if *cursor + GRID_WIDTH < GRID_CELLS {
                *cursor += GRID_WIDTH;
            }
        }
        GameAction::Place => place(session, toast, *cursor),
        GameAction::PlaceAt(cell) => place(session, toast, cell as usize),
        GameAction::Restart => {
            session.restart();
            *toast = Some(Toast::new(format!("replaying seed \"{}\"", session.seed())));
        }
        GameAction::NewGame => {
            *session = GameSession::with_random_seed();
            session.start();
            *toast = Some(Toast::new(format!("new game, seed \"{}\"", session.seed())));
        }
        GameAction::Share => {
            *toast = Some(Toast::new(session.share_text()));
        }
    }
}

fn place(session: &mut GameSession, toast: &mut Option<Toast>, cell: usize) {
    // Invalid placements are silent no-ops; only scores get a toast.
    let Some(report) = session.place_card(cell) else {
        return;
    };

    let combo = report.evaluation.combo();
    if combo >= 2 {
        *toast = Some(Toast::new(format!(
            "COMBO x{}! +{}",
            combo_multiplier(combo),
            report.evaluation.total_points
        )));
    } else if let Some(m) = report.evaluation.matches.first() {
        *toast = Some(Toast::new(format!(
            "+{} {}",
            report.evaluation.total_points,
            m.kind.label()
        )));
    }
}
