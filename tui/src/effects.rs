//! Modal open/close transitions.

use ratatui::layout::Rect;

use landing_types::ui::{ModalEffect, ModalEffectKind, ease_out_cubic};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    let scale = match effect.kind() {
        ModalEffectKind::PopScale => 0.6 + 0.4 * t,
        ModalEffectKind::FadeOut => 1.0 - 0.4 * t,
    };
    scale_rect(base, scale)
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::apply_modal_effect;
    use landing_types::ui::ModalEffect;
    use ratatui::layout::Rect;
    use std::time::Duration;

    const BASE: Rect = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 10,
    };

    #[test]
    fn pop_scale_starts_small_and_ends_full() {
        let mut effect = ModalEffect::pop_scale(Duration::from_millis(100));
        let start = apply_modal_effect(&effect, BASE);
        assert!(start.width < BASE.width);

        effect.advance(Duration::from_millis(100));
        assert_eq!(apply_modal_effect(&effect, BASE), BASE);
    }

    #[test]
    fn fade_out_shrinks_around_center() {
        let mut effect = ModalEffect::fade_out(Duration::from_millis(100));
        assert_eq!(apply_modal_effect(&effect, BASE), BASE);

        effect.advance(Duration::from_millis(100));
        let end = apply_modal_effect(&effect, BASE);
        assert!(end.width < BASE.width && end.height < BASE.height);
        assert!(end.x > BASE.x && end.y > BASE.y);
    }
}
