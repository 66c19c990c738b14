//! Static copy for each page section.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use landing_types::ui::Section;

use crate::theme::{Glyphs, Palette, styles};

/// A section's primary button and the dialog copy it opens with.
///
/// `None` copy means the demo-request defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub title: Option<&'static str>,
    pub subject: Option<&'static str>,
}

#[must_use]
pub fn call_to_action(section: Section) -> Option<CallToAction> {
    match section {
        Section::Hero | Section::CallToAction => Some(CallToAction {
            label: "Get your free demo",
            title: None,
            subject: None,
        }),
        Section::MarginEngine => Some(CallToAction {
            label: "Talk to sales",
            title: Some("TALK TO SALES"),
            subject: Some("Pricing Inquiry"),
        }),
        Section::Architecture | Section::Risk => None,
    }
}

const PRICING_TIERS: [(&str, &str, [&str; 3]); 3] = [
    (
        "Starter",
        "0.40% of settled volume",
        [
            "Single pricing book",
            "Daily margin reports",
            "Email support",
        ],
    ),
    (
        "Growth",
        "0.25% of settled volume",
        [
            "Unlimited pricing books",
            "Intraday margin alerts",
            "Dedicated onboarding",
        ],
    ),
    (
        "Enterprise",
        "Custom",
        [
            "Private deployment",
            "Custom risk limits",
            "24/7 desk coverage",
        ],
    ),
];

const RISK_NOTES: [&str; 4] = [
    "Quoted margins are estimates until trades settle.",
    "Historical spreads do not guarantee future spreads.",
    "Hedging rules run on your limits; review them before go-live.",
    "Market data outages pause automated repricing.",
];

/// Rendered lines for `section`, heading first, trailing blank line last.
#[must_use]
pub fn section_lines(section: Section, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = match section {
        Section::Hero => hero(palette),
        Section::Architecture => architecture(palette, glyphs),
        Section::MarginEngine => margin_engine(palette, glyphs),
        Section::Risk => risk(palette, glyphs),
        Section::CallToAction => closing(palette),
    };
    if let Some(cta) = call_to_action(section) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", cta.label), styles::call_to_action(palette)),
            Span::styled("  press Enter", styles::key_hint(palette)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        glyphs.rule.repeat(60),
        Style::default().fg(palette.bg_border),
    )));
    lines.push(Line::from(""));
    lines
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text, styles::heading(palette)))
}

fn body(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(format!("  {text}"), styles::body(palette)))
}

fn hero(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "MARGIN WITHOUT THE GUESSWORK",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        body("Price every order against live costs, hedges and limits.", palette),
        body("One engine from quote to settlement, audited end to end.", palette),
    ]
}

fn architecture(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let node = Style::default().fg(palette.accent);
    let arrow = Style::default().fg(palette.text_muted);
    let flow = |left: &'static str, right: &'static str| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[ {left} ]"), node),
            Span::styled(format!(" {} ", glyphs.arrow_right), arrow),
            Span::styled(format!("[ {right} ]"), node),
        ])
    };
    let down = Line::from(Span::styled(format!("      {}", glyphs.arrow_down), arrow));

    vec![
        heading("ARCHITECTURE", palette),
        Line::from(""),
        flow("Order Feed", "Pricing Core"),
        down.clone(),
        flow("Margin Engine", "Risk Limits"),
        down,
        flow("Ledger", "Reporting"),
        Line::from(""),
        body("Every hop is idempotent and replayable from the ledger.", palette),
    ]
}

fn margin_engine(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("THE MARGIN ENGINE", palette),
        Line::from(""),
        body("Pay on settled volume. No seat licences.", palette),
    ];
    for (name, price, features) in PRICING_TIERS {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                name,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {price}"), Style::default().fg(palette.success)),
        ]));
        for feature in features {
            lines.push(Line::from(vec![
                Span::styled(format!("    {} ", glyphs.check), Style::default().fg(palette.success)),
                Span::styled(feature, styles::body(palette)),
            ]));
        }
    }
    lines
}

fn risk(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![heading("RISK", palette), Line::from("")];
    for note in RISK_NOTES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", glyphs.warning), Style::default().fg(palette.warning)),
            Span::styled(note, styles::body(palette)),
        ]));
    }
    lines
}

fn closing(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        heading("READY TO SEE IT LIVE?", palette),
        Line::from(""),
        body("Walk through your own order flow with our pricing team.", palette),
    ]
}
