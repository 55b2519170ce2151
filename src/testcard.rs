//! The deterministic smiley test card drawn by `create_bitmap`.
//!
//! Every coordinate below is a fixed offset from the display center, so
//! the card renders identically on every invocation.

use crate::canvas::Canvas;
use crate::draw::{self, Point};
use crate::text;
use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Intensity used for every stroke on the card.
const INK: u8 = 255;

const FACE_RADIUS: i32 = 40;
const FACE_STROKE: i32 = 2;

const EYE_RADIUS: i32 = 8;
const EYE_OFFSET_X: i32 = 25;
const EYE_OFFSET_Y: i32 = -10;

const SMILE_HALF_WIDTH: i32 = 35;
const SMILE_OFFSET_Y: i32 = 10;
const SMILE_DEPTH: i32 = 15;
const SMILE_STROKE: i32 = 2;

const CAPTION: &str = "Hello from AugmentOS!";
const CAPTION_ORIGIN: Point = (DISPLAY_WIDTH as i32 / 2 - 150, 30);
const CAPTION_SCALE: u32 = 3;

/// Render the test card onto a fresh black canvas.
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let cx = DISPLAY_WIDTH as i32 / 2;
    let cy = DISPLAY_HEIGHT as i32 / 2;

    draw::stroke_circle(&mut canvas, (cx, cy), FACE_RADIUS, INK, FACE_STROKE);

    draw::fill_circle(
        &mut canvas,
        (cx - EYE_OFFSET_X, cy + EYE_OFFSET_Y),
        EYE_RADIUS,
        INK,
    );
    draw::fill_circle(
        &mut canvas,
        (cx + EYE_OFFSET_X, cy + EYE_OFFSET_Y),
        EYE_RADIUS,
        INK,
    );

    // Open curve: left corner, dropped midpoint, right corner.
    let smile = [
        (cx - SMILE_HALF_WIDTH, cy + SMILE_OFFSET_Y),
        (cx, cy + SMILE_OFFSET_Y + SMILE_DEPTH),
        (cx + SMILE_HALF_WIDTH, cy + SMILE_OFFSET_Y),
    ];
    draw::polyline(&mut canvas, &smile, INK, SMILE_STROKE);

    text::draw_text(&mut canvas, CAPTION, CAPTION_ORIGIN, CAPTION_SCALE, INK);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_display_dimensions() {
        let card = render();
        assert_eq!(card.w, DISPLAY_WIDTH);
        assert_eq!(card.h, DISPLAY_HEIGHT);
    }

    #[test]
    fn card_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn card_contains_ink_on_black() {
        let card = render();
        let lit = card.as_slice().iter().filter(|&&px| px == INK).count();
        let dark = card.as_slice().iter().filter(|&&px| px == 0).count();
        assert!(lit > 0, "no strokes rendered");
        assert!(dark > lit, "background should dominate a test card");
    }

    #[test]
    fn caption_stays_inside_the_display() {
        let end = CAPTION_ORIGIN.0 + text::text_width(CAPTION, CAPTION_SCALE);
        assert!(end <= DISPLAY_WIDTH as i32);
        assert!(CAPTION_ORIGIN.1 <= DISPLAY_HEIGHT as i32);
    }
}
