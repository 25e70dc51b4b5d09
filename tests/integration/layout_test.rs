//! Auto-fit layout through the public API.

use pretty_assertions::assert_eq;
use quote_scribe::render::{layout, LayoutRequest, MonospaceMeasure, Point};

// One unit of width per character per point of font size
const UNIT: MonospaceMeasure = MonospaceMeasure { advance: 1.0 };

fn request(text: &str, start: f32, min: f32) -> LayoutRequest<'_> {
    // 1000 wide, 100 reserved on the right, anchored at x = 100: 800 usable
    LayoutRequest::new(1000.0, 600.0, text, Point::new(100.0, 300.0), start, min)
}

#[test]
fn test_exact_fit_is_accepted() {
    // 10 chars: 85pt -> 850 (too wide), 80pt -> 800 (exactly the limit)
    let result = layout(&UNIT, &request("abcdefghij", 90.0, 10.0));
    assert_eq!(result.font_size, 80.0);
    assert_eq!(result.width, 800.0);
    assert!(result.fits);
    assert_eq!(result.line_count, 1);
}

#[test]
fn test_first_measure_is_one_step_below_start() {
    // Would fit at 90pt, but the first size tried is 85pt
    let result = layout(&UNIT, &request("abcdefgh", 90.0, 10.0));
    assert_eq!(result.font_size, 85.0);
    assert!(result.fits);
}

#[test]
fn test_wraps_when_shrinking_is_not_enough() {
    // 87 chars never fit on one line at 15pt. Breaking after the fifth word
    // leaves a 54 char line (810 at 15pt), so the break moves one word earlier.
    let text = "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd eeeeeeeeee ffffffffff \
                gggggggggg hhhhhhhhhh";
    let result = layout(&UNIT, &request(text, 70.0, 15.0));
    assert!(result.fits);
    assert_eq!(result.line_count, 2);
    assert_eq!(result.font_size, 15.0);
    assert_eq!(
        result.text,
        "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd\neeeeeeeeee ffffffffff gggggggggg hhhhhhhhhh"
    );
}

#[test]
fn test_single_word_overflow_is_best_effort() {
    let word = "x".repeat(100);
    let result = layout(&UNIT, &request(&word, 70.0, 10.0));
    assert!(!result.fits);
    assert_eq!(result.font_size, 10.0);
    assert_eq!(result.text, word);
    assert_eq!(result.line_count, 1);
}
