//! Page composition root.
//!
//! Lays the sections out in fixed order, owns the smooth scroller, and turns
//! store notifications into redraws and modal transitions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use ratatui::text::Line;

use landing_engine::{
    AnimPhase, ModalEffect, ModalEffectKind, ModalState, ScrollController, ScrollState,
    ScrollTarget, Section, SiteContext, Subscription,
};

use crate::content::{call_to_action, section_lines};
use crate::scroller::SmoothScroller;
use crate::theme::{glyphs, palette};

const MODAL_OPEN_DURATION: Duration = Duration::from_millis(180);
const MODAL_CLOSE_DURATION: Duration = Duration::from_millis(150);

/// Per-session tuning for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub scroll_duration: Duration,
    /// Lines kept from the previous page on page up/down.
    pub page_overlap: u16,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            scroll_duration: Duration::from_millis(600),
            page_overlap: 2,
        }
    }
}

/// All section lines plus where each section starts.
#[derive(Debug, Clone)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
}

impl PageLayout {
    #[must_use]
    pub fn compose(context: &SiteContext) -> Self {
        let palette = palette(context.options);
        let glyphs = glyphs(context.options);
        let mut lines = Vec::new();
        let mut anchors = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            anchors.push((section, line_index(lines.len())));
            lines.extend(section_lines(section, &palette, &glyphs));
        }
        Self { lines, anchors }
    }

    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        line_index(self.lines.len())
    }

    #[must_use]
    pub fn anchors(&self) -> &[(Section, u16)] {
        &self.anchors
    }

    #[must_use]
    pub fn anchor(&self, section: Section) -> u16 {
        self.anchors
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map_or(0, |(_, line)| *line)
    }

    /// Scrollable extent for a viewport of `viewport` lines. Short trailing
    /// sections get blank space below them so their anchor can reach the top.
    #[must_use]
    pub fn scroll_height(&self, viewport: u16) -> u16 {
        let last = self.anchors.last().map_or(0, |(_, line)| *line);
        self.height().max(last.saturating_add(viewport))
    }

    /// The last section starting at or above `offset`.
    #[must_use]
    pub fn section_at(&self, offset: u16) -> Section {
        self.anchors
            .iter()
            .take_while(|(_, line)| *line <= offset)
            .last()
            .map_or(Section::Hero, |(section, _)| *section)
    }
}

fn line_index(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

/// Store notifications queued for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreChange {
    ModalOpened,
    ModalClosed,
    /// Copy changed while the dialog stayed open or closed.
    ModalUpdated,
    Scroll,
}

/// What the modal overlay should show this frame.
#[derive(Debug)]
pub struct ModalView<'a> {
    pub state: ModalState,
    pub effect: Option<&'a ModalEffect>,
}

/// The landing page: sections, scroller, and reactions to shared state.
pub struct LandingPage {
    context: SiteContext,
    layout: PageLayout,
    scroller: Rc<SmoothScroller>,
    options: PageOptions,
    changes: Rc<RefCell<Vec<StoreChange>>>,
    subscriptions: Vec<Subscription>,
    modal_effect: Option<ModalEffect>,
    viewport_height: u16,
    dirty: bool,
}

impl LandingPage {
    /// Mount the page: subscribe to the stores and register the scroller.
    #[must_use]
    pub fn new(context: SiteContext, options: PageOptions) -> Self {
        let layout = PageLayout::compose(&context);
        let scroller = Rc::new(SmoothScroller::new(
            options.scroll_duration,
            context.options.reduced_motion,
        ));
        scroller.set_anchors(layout.anchors().to_vec());
        scroller.set_bounds(layout.height(), 0);

        let changes = Rc::new(RefCell::new(Vec::new()));
        let subscriptions = vec![
            subscribe_modal(&context, Rc::clone(&changes)),
            subscribe_scroll(&context, Rc::clone(&changes)),
        ];

        let controller: Rc<dyn ScrollController> = scroller.clone();
        context.scroll.set_controller(Some(&controller));
        tracing::debug!(lines = layout.height(), "landing page mounted");

        Self {
            context,
            layout,
            scroller,
            options,
            changes,
            subscriptions,
            modal_effect: None,
            viewport_height: 0,
            dirty: true,
        }
    }

    #[must_use]
    pub fn context(&self) -> &SiteContext {
        &self.context
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn scroller(&self) -> &SmoothScroller {
        &self.scroller
    }

    #[must_use]
    pub fn offset(&self) -> u16 {
        self.scroller.offset()
    }

    #[must_use]
    pub fn current_section(&self) -> Section {
        self.layout.section_at(self.scroller.offset())
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        if self.viewport_height != height {
            self.viewport_height = height;
            self.scroller.set_bounds(self.layout.scroll_height(height), height);
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Drain store notifications and advance animations by `delta`.
    pub fn tick(&mut self, delta: Duration) {
        let changes = std::mem::take(&mut *self.changes.borrow_mut());
        let reduced_motion = self.context.options.reduced_motion;
        for change in changes {
            self.dirty = true;
            self.modal_effect = match change {
                StoreChange::ModalOpened if !reduced_motion => {
                    Some(ModalEffect::pop_scale(MODAL_OPEN_DURATION))
                }
                StoreChange::ModalClosed if !reduced_motion => {
                    Some(ModalEffect::fade_out(MODAL_CLOSE_DURATION))
                }
                StoreChange::ModalOpened | StoreChange::ModalClosed => None,
                StoreChange::ModalUpdated | StoreChange::Scroll => continue,
            };
        }

        if let Some(effect) = self.modal_effect.as_mut() {
            effect.advance(delta);
            self.dirty = true;
            if matches!(effect.phase(), AnimPhase::Completed) {
                self.modal_effect = None;
            }
        }

        if self.scroller.tick(delta) {
            self.dirty = true;
        }
    }

    /// Scroll through whatever controller the scroll store currently holds.
    pub fn navigate(&mut self, target: ScrollTarget) {
        if let ScrollTarget::Section(section) = target {
            tracing::trace!(anchor = section.anchor(), "navigate to section");
        }
        match self.context.scroll.controller() {
            Some(controller) => {
                controller.scroll_to(target);
                self.dirty = true;
            }
            None => tracing::debug!(?target, "no scroll controller registered"),
        }
    }

    pub fn scroll_lines(&mut self, lines: i32) {
        match self.context.scroll.controller() {
            Some(controller) => {
                controller.scroll_by(lines);
                self.dirty = true;
            }
            None => tracing::debug!(lines, "no scroll controller registered"),
        }
    }

    pub fn page_down(&mut self) {
        self.scroll_lines(self.page_step());
    }

    pub fn page_up(&mut self) {
        self.scroll_lines(-self.page_step());
    }

    fn page_step(&self) -> i32 {
        i32::from(
            self.viewport_height
                .saturating_sub(self.options.page_overlap)
                .max(1),
        )
    }

    /// Glide to the section after the one in view, wrapping to the top.
    pub fn next_section(&mut self) {
        let next = self.current_section().next();
        self.navigate(ScrollTarget::Section(next));
    }

    /// Trigger the call to action of the section in view, if it has one.
    pub fn activate(&mut self) {
        let section = self.current_section();
        match call_to_action(section) {
            Some(cta) => self.context.modal.open_modal(cta.title, cta.subject),
            None => tracing::debug!(?section, "section has no call to action"),
        }
    }

    /// Overlay content: open dialogs, and closing ones mid-transition with
    /// the copy they were last shown with.
    #[must_use]
    pub fn modal_view(&self) -> Option<ModalView<'_>> {
        let state = self.context.modal.get_state();
        let closing = self
            .modal_effect
            .as_ref()
            .is_some_and(|effect| effect.kind() == ModalEffectKind::FadeOut);
        if state.is_open() || closing {
            Some(ModalView {
                state,
                effect: self.modal_effect.as_ref(),
            })
        } else {
            None
        }
    }
}

impl Drop for LandingPage {
    fn drop(&mut self) {
        self.subscriptions.clear();
        // Leave a controller registered by someone else alone.
        let ours: Rc<dyn ScrollController> = self.scroller.clone();
        if self.context.scroll.get_state().is_controller(&ours) {
            self.context.scroll.set_controller(None);
        }
        tracing::debug!("landing page unmounted");
    }
}

fn subscribe_modal(context: &SiteContext, changes: Rc<RefCell<Vec<StoreChange>>>) -> Subscription {
    let was_open = Cell::new(context.modal.is_open());
    context.modal.subscribe(move |state: &ModalState| {
        let change = match (was_open.replace(state.is_open()), state.is_open()) {
            (false, true) => StoreChange::ModalOpened,
            (true, false) => StoreChange::ModalClosed,
            _ => StoreChange::ModalUpdated,
        };
        changes.borrow_mut().push(change);
    })
}

fn subscribe_scroll(context: &SiteContext, changes: Rc<RefCell<Vec<StoreChange>>>) -> Subscription {
    context.scroll.subscribe(move |_: &ScrollState| {
        changes.borrow_mut().push(StoreChange::Scroll);
    })
}
