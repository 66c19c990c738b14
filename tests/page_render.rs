//! Full-frame rendering of the landing page through a virtual terminal.

mod vt100_backend;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use landing_engine::{ScrollTarget, Section, SiteContext, UiOptions};
use landing_tui::{LandingPage, PageOptions, draw, handle_key};

use vt100_backend::VT100Backend;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn page_with(options: UiOptions) -> LandingPage {
    LandingPage::new(SiteContext::new(options), PageOptions::default())
}

fn still_page() -> LandingPage {
    page_with(UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    })
}

fn render(page: &mut LandingPage) -> String {
    let mut terminal = Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("terminal");
    terminal.draw(|frame| draw(frame, page)).expect("draw");
    // Second pass once the scroller knows the viewport height.
    page.tick(Duration::ZERO);
    terminal.draw(|frame| draw(frame, page)).expect("draw");
    terminal.backend().contents()
}

fn press(page: &mut LandingPage, code: KeyCode) {
    handle_key(page, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn first_screen_shows_nav_hero_and_hints() {
    let mut page = still_page();
    let screen = render(&mut page);

    assert!(screen.contains("1 Home"));
    assert!(screen.contains("3 Margin Engine"));
    assert!(screen.contains("MARGIN WITHOUT THE GUESSWORK"));
    assert!(screen.contains("Get your free demo"));
    assert!(screen.contains("quit"));
    assert!(!screen.contains("Subject:"));
}

#[test]
fn open_dialog_is_drawn_over_the_page() {
    let mut page = still_page();
    press(&mut page, KeyCode::Enter);
    let screen = render(&mut page);

    assert!(screen.contains("GET YOUR FREE DEMO"));
    assert!(screen.contains("Subject: Demo Request"));
    assert!(screen.contains("Esc to close"));
}

#[test]
fn pricing_section_opens_sales_dialog() {
    let mut page = still_page();
    page.navigate(ScrollTarget::Section(Section::MarginEngine));
    let screen = render(&mut page);
    assert!(screen.contains("THE MARGIN ENGINE"));
    assert!(screen.contains("Growth"));

    press(&mut page, KeyCode::Enter);
    let screen = render(&mut page);
    assert!(screen.contains("TALK TO SALES"));
    assert!(screen.contains("Subject: Pricing Inquiry"));
}

#[test]
fn closed_dialog_disappears_without_motion() {
    let mut page = still_page();
    press(&mut page, KeyCode::Char('d'));
    press(&mut page, KeyCode::Esc);
    let screen = render(&mut page);
    assert!(!screen.contains("Esc to close"));
}

#[test]
fn closing_transition_keeps_last_copy() {
    let mut page = page_with(UiOptions::default());
    page.context()
        .modal
        .open_modal(Some("Custom Title"), Some("Custom Subject"));
    page.tick(Duration::from_secs(1));
    page.context().modal.close_modal();
    page.tick(Duration::from_millis(1));

    let screen = render(&mut page);
    assert!(screen.contains("Custom Title"));
    assert!(!page.context().modal.is_open());
}

#[test]
fn nav_highlight_follows_scroll_position() {
    let mut page = still_page();
    page.navigate(ScrollTarget::Section(Section::Architecture));
    let screen = render(&mut page);
    assert!(screen.contains("ARCHITECTURE"));
    assert!(screen.contains("Order Feed"));
    assert_eq!(page.current_section(), Section::Architecture);
}

#[test]
fn ascii_only_renders_ascii() {
    let mut page = page_with(UiOptions {
        ascii_only: true,
        reduced_motion: true,
        ..UiOptions::default()
    });
    page.navigate(ScrollTarget::Section(Section::Architecture));
    let screen = render(&mut page);
    assert!(screen.contains("->"));
    assert!(screen.is_ascii(), "non-ascii glyph in:\n{screen}");
}

#[test]
fn final_section_is_highlighted_and_opens_demo() {
    let mut page = still_page();
    render(&mut page);
    press(&mut page, KeyCode::Char('5'));
    let screen = render(&mut page);
    assert_eq!(page.current_section(), Section::CallToAction);
    assert!(screen.contains("READY TO SEE IT LIVE?"));

    press(&mut page, KeyCode::Enter);
    let screen = render(&mut page);
    assert!(screen.contains("Subject: Demo Request"));
    assert!(!screen.contains("TALK TO SALES"));

    press(&mut page, KeyCode::Esc);
    press(&mut page, KeyCode::Tab);
    assert_eq!(page.current_section(), Section::Hero);
}

#[test]
fn replaced_dialog_copy_is_redrawn() {
    let mut page = page_with(UiOptions::default());
    page.context()
        .modal
        .open_modal(Some("First Title"), Some("First Subject"));
    page.tick(Duration::from_secs(1));
    let screen = render(&mut page);
    assert!(screen.contains("First Subject"));

    page.context()
        .modal
        .open_modal(Some("Second Title"), Some("Second Subject"));
    page.tick(Duration::ZERO);
    assert!(page.needs_redraw());
    let screen = render(&mut page);
    assert!(screen.contains("Second Title"));
    assert!(screen.contains("Subject: Second Subject"));
    assert!(!screen.contains("First Subject"));
}

#[test]
fn open_dialog_swaps_status_hints() {
    let mut page = still_page();
    press(&mut page, KeyCode::Char('d'));
    let screen = render(&mut page);
    assert!(screen.contains("Esc close"));
    assert!(!screen.contains("p pricing"));
}
