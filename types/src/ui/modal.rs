//! Demo-request dialog state and its open/close transition effects.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::{NonEmptyStaticStr, NonEmptyString};

pub const DEFAULT_MODAL_TITLE: NonEmptyStaticStr = NonEmptyStaticStr::new("GET YOUR FREE DEMO");
pub const DEFAULT_MODAL_SUBJECT: NonEmptyStaticStr = NonEmptyStaticStr::new("Demo Request");

/// Visibility and copy of the demo-request dialog.
///
/// Fields are private: title and subject only change together with
/// visibility, through [`ModalPatch::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
    title: NonEmptyString,
    subject: NonEmptyString,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            is_open: false,
            title: DEFAULT_MODAL_TITLE.into(),
            subject: DEFAULT_MODAL_SUBJECT.into(),
        }
    }
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn title(&self) -> &NonEmptyString {
        &self.title
    }

    #[must_use]
    pub fn subject(&self) -> &NonEmptyString {
        &self.subject
    }

    /// Shallow merge: fields absent from the patch keep their value.
    pub fn apply(&mut self, patch: ModalPatch) {
        if let Some(is_open) = patch.is_open {
            self.is_open = is_open;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
    }
}

/// Partial [`ModalState`] update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalPatch {
    is_open: Option<bool>,
    title: Option<NonEmptyString>,
    subject: Option<NonEmptyString>,
}

impl ModalPatch {
    /// Show the dialog with the given copy. Missing or blank text falls back
    /// to the demo-request defaults.
    #[must_use]
    pub fn open(title: Option<&str>, subject: Option<&str>) -> Self {
        Self {
            is_open: Some(true),
            title: Some(NonEmptyString::or_default(title, DEFAULT_MODAL_TITLE)),
            subject: Some(NonEmptyString::or_default(subject, DEFAULT_MODAL_SUBJECT)),
        }
    }

    /// Hide the dialog. Title and subject are left as they were.
    #[must_use]
    pub fn close() -> Self {
        Self {
            is_open: Some(false),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffectKind {
    PopScale,
    FadeOut,
}

#[derive(Debug, Clone)]
pub struct ModalEffect {
    kind: ModalEffectKind,
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    /// Closing transition; renders the last-shown title and subject.
    #[must_use]
    pub fn fade_out(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::FadeOut,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> ModalEffectKind {
        self.kind
    }
}
