//! Input handling for the landing page.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use landing_engine::{ScrollTarget, Section};

use crate::content::call_to_action;
use crate::page::LandingPage;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Result of applying one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Drain queued input. Returns `Ok(true)` when the user asked to quit.
pub fn handle_events(page: &mut LandingPage, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if apply_event(page, ev) == KeyOutcome::Quit {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn apply_event(page: &mut LandingPage, ev: Event) -> KeyOutcome {
    match ev {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(page, key)
        }
        Event::Resize(_, _) => {
            page.request_redraw();
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

/// Key bindings. While the dialog is open only closing and quitting work.
pub fn handle_key(page: &mut LandingPage, key: KeyEvent) -> KeyOutcome {
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || key.code == KeyCode::Char('q') {
        return KeyOutcome::Quit;
    }

    if page.context().modal.is_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            page.context().modal.close_modal();
        }
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char(digit @ '1'..='9') => match Section::from_digit(digit) {
            Some(section) => page.navigate(ScrollTarget::Section(section)),
            None => debug!(%digit, "no section for digit"),
        },
        KeyCode::Tab => page.next_section(),
        KeyCode::Enter => page.activate(),
        KeyCode::Char('d') => page.context().modal.open_demo(),
        KeyCode::Char('p') => {
            if let Some(cta) = call_to_action(Section::MarginEngine) {
                page.context().modal.open_modal(cta.title, cta.subject);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => page.scroll_lines(1),
        KeyCode::Char('k') | KeyCode::Up => page.scroll_lines(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => page.page_down(),
        KeyCode::PageUp => page.page_up(),
        KeyCode::Char('g') | KeyCode::Home => page.navigate(ScrollTarget::Top),
        KeyCode::Char('G') | KeyCode::End => page.navigate(ScrollTarget::Bottom),
        _ => {}
    }
    KeyOutcome::Continue
}
