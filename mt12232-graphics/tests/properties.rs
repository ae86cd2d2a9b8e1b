use mt12232_graphics::fonts::FONT_6X8;
use mt12232_graphics::{merge_row, Framebuffer};
use proptest::prelude::*;

const WIDTH: usize = 122;
const HEIGHT: usize = 32;

fn panel(seed: &[u8]) -> Framebuffer<[u8; 488]> {
    let mut bytes = [0u8; 488];
    for (byte, value) in bytes.iter_mut().zip(seed.iter().cycle()) {
        *byte = *value;
    }
    Framebuffer::new(bytes, WIDTH, WIDTH, HEIGHT).unwrap()
}

fn inside(px: usize, py: usize, x: usize, y: usize, w: usize, h: usize) -> bool {
    px >= x && px < x.saturating_add(w) && py >= y && py < y.saturating_add(h)
}

proptest! {
    #[test]
    fn clear_rect_touches_only_the_rect(
        seed in proptest::collection::vec(any::<u8>(), 1..64),
        x in 0usize..140,
        y in 0usize..40,
        w in 0usize..140,
        h in 0usize..40,
    ) {
        let before = panel(&seed);
        let mut after = panel(&seed);
        after.clear_rect(x, y, w, h);

        for py in 0..HEIGHT {
            for px in 0..WIDTH {
                if inside(px, py, x, y, w, h) {
                    prop_assert_eq!(after.pixel(px, py), Some(false));
                } else {
                    prop_assert_eq!(after.pixel(px, py), before.pixel(px, py));
                }
            }
        }
    }

    #[test]
    fn draw_text_stays_inside_the_rect(
        seed in proptest::collection::vec(any::<u8>(), 1..64),
        x in 0usize..140,
        y in 0usize..40,
        w in 0usize..140,
        h in 0usize..40,
        text in "[ -~]{0,24}",
    ) {
        let before = panel(&seed);
        let mut after = panel(&seed);
        after.draw_text(&FONT_6X8, x, y, w, h, &text);

        for py in 0..HEIGHT {
            for px in 0..WIDTH {
                if !inside(px, py, x, y, w, h) {
                    prop_assert_eq!(after.pixel(px, py), before.pixel(px, py));
                }
            }
        }
    }

    #[test]
    fn empty_text_equals_clear(
        seed in proptest::collection::vec(any::<u8>(), 1..64),
        x in 0usize..130,
        y in 0usize..36,
        w in 0usize..130,
        h in 0usize..36,
    ) {
        let mut drawn = panel(&seed);
        let mut cleared = panel(&seed);
        drawn.draw_text(&FONT_6X8, x, y, w, h, "");
        cleared.clear_rect(x, y, w, h);
        prop_assert_eq!(drawn.as_bytes(), cleared.as_bytes());
    }

    #[test]
    fn shifted_text_matches_aligned_text(
        x in 0usize..60,
        row in 0usize..24,
        text in "[ -~]{1,10}",
    ) {
        let mut aligned = panel(&[0]);
        let mut shifted = panel(&[0]);
        aligned.draw_text(&FONT_6X8, x, 0, WIDTH, 8, &text);
        shifted.draw_text(&FONT_6X8, x, row, WIDTH, 8, &text);

        for py in 0..8 {
            for px in 0..WIDTH {
                prop_assert_eq!(shifted.pixel(px, py + row), aligned.pixel(px, py));
            }
        }
    }

    #[test]
    fn merge_row_is_an_xor(
        dest in any::<u8>(),
        high in any::<u8>(),
        low in any::<u8>(),
        shift in 0u8..8,
        mask in any::<u8>(),
    ) {
        let once = merge_row(dest, high, low, shift, mask);
        prop_assert_eq!(merge_row(once, high, low, shift, mask), dest);
        prop_assert_eq!(once & !mask, dest & !mask);
    }

    #[test]
    fn merge_row_without_shift_ignores_high_bits(
        high in any::<u8>(),
        low in any::<u8>(),
    ) {
        prop_assert_eq!(merge_row(0, high, low, 0, 0xFF), low);
    }
}
