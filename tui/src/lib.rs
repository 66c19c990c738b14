//! Terminal view layer for the landing page.

mod content;
mod effects;
mod input;
mod page;
mod scroller;
mod theme;

pub use content::{CallToAction, call_to_action};
pub use effects::apply_modal_effect;
pub use input::{InputPump, KeyOutcome, apply_event, handle_events, handle_key};
pub use page::{LandingPage, ModalView, PageLayout, PageOptions};
pub use scroller::SmoothScroller;
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use landing_engine::{ModalEffectKind, Section};

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 10;

/// Main draw function
pub fn draw(frame: &mut Frame, page: &mut LandingPage) {
    let options = page.context().options;
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    page.set_viewport_height(chunks[1].height);

    draw_nav(frame, page, chunks[0], &palette);
    draw_body(frame, page, chunks[1]);
    draw_status_bar(frame, page, chunks[2], &palette, &glyphs);

    if let Some(view) = page.modal_view() {
        draw_modal(frame, &view, &palette);
    }

    page.mark_drawn();
}

fn draw_nav(frame: &mut Frame, page: &LandingPage, area: Rect, palette: &Palette) {
    let current = page.current_section();
    let mut spans = Vec::with_capacity(Section::ALL.len() * 2);
    let mut used = 0usize;
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.label());
        let width = label.width() + 1;
        if used + width > usize::from(area.width) {
            break;
        }
        used += width;
        let style = if section == current {
            styles::nav_active(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_highlight)),
        area,
    );
}

fn draw_body(frame: &mut Frame, page: &LandingPage, area: Rect) {
    let body = Paragraph::new(page.layout().lines().to_vec()).scroll((page.offset(), 0));
    let inner = Rect {
        x: area.x.saturating_add(2),
        width: area.width.saturating_sub(2),
        ..area
    };
    frame.render_widget(body, inner);
}

fn draw_status_bar(
    frame: &mut Frame,
    page: &LandingPage,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let max = page.scroller().max_offset();
    let percent = if max == 0 {
        100
    } else {
        u32::from(page.offset()) * 100 / u32::from(max)
    };

    let hints: &[(&str, &str)] = if page.context().modal.is_open() {
        &[("Esc", "close"), ("q", "quit")]
    } else {
        &[
            ("1-5", "jump"),
            ("Enter", "action"),
            ("d", "demo"),
            ("p", "pricing"),
            ("q", "quit"),
        ]
    };
    let mut spans = Vec::new();
    for &(key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action} "), styles::key_hint(palette)));
        spans.push(Span::styled(glyphs.box_vertical, styles::key_hint(palette)));
    }
    spans.push(Span::styled(
        format!(" {percent:>3}%"),
        Style::default().fg(palette.text_muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_modal(frame: &mut Frame, view: &ModalView<'_>, palette: &Palette) {
    let area = frame.area();
    let width = MODAL_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let height = MODAL_HEIGHT.min(area.height.saturating_sub(2)).max(1);
    let base = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    let rect = view
        .effect
        .map_or(base, |effect| apply_modal_effect(effect, base));

    let closing = view
        .effect
        .is_some_and(|effect| effect.kind() == ModalEffectKind::FadeOut);
    let border = if closing {
        palette.text_muted
    } else {
        palette.primary
    };
    let text = if closing {
        palette.text_muted
    } else {
        palette.text_primary
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Subject: ", Style::default().fg(palette.text_muted)),
            Span::styled(
                view.state.subject().to_string(),
                Style::default().fg(text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Tell us about your order flow and a pricing specialist",
            Style::default().fg(text),
        )),
        Line::from(Span::styled(
            "will reach out within one business day.",
            Style::default().fg(text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(palette.text_muted),
        )),
    ];

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", view.state.title()),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(palette.bg_popup));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
