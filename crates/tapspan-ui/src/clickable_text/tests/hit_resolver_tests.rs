use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn buttons(count: usize) -> Vec<Button> {
    (0..count).map(|i| Button::new(i * 10..i * 10 + 5)).collect()
}

#[test]
fn resolves_offset_inside_range() {
    let ranges = [TextRange::new(0, 5), TextRange::new(10, 15)];
    let buttons = buttons(2);
    assert_eq!(resolve_click(Some(0), &ranges, &buttons), Some(0));
    assert_eq!(resolve_click(Some(4), &ranges, &buttons), Some(0));
    assert_eq!(resolve_click(Some(12), &ranges, &buttons), Some(1));
}

#[test]
fn gaps_and_range_ends_miss() {
    let ranges = [TextRange::new(0, 5), TextRange::new(10, 15)];
    let buttons = buttons(2);
    assert_eq!(resolve_click(Some(5), &ranges, &buttons), None);
    assert_eq!(resolve_click(Some(9), &ranges, &buttons), None);
    assert_eq!(resolve_click(Some(15), &ranges, &buttons), None);
    assert_eq!(resolve_click(Some(400), &ranges, &buttons), None);
}

#[test]
fn touching_ranges_resolve_to_the_right_button() {
    let ranges = [TextRange::new(0, 5), TextRange::new(5, 9)];
    let buttons = buttons(2);
    assert_eq!(resolve_click(Some(4), &ranges, &buttons), Some(0));
    assert_eq!(resolve_click(Some(5), &ranges, &buttons), Some(1));
}

#[test]
fn empty_range_is_never_hit() {
    let ranges = [TextRange::new(3, 3), TextRange::new(3, 6)];
    let buttons = buttons(2);
    assert_eq!(resolve_click(Some(3), &ranges, &buttons), Some(1));
}

#[test]
fn no_offset_resolves_to_none() {
    let ranges = [TextRange::new(0, 5)];
    assert_eq!(resolve_click(None, &ranges, &buttons(1)), None);
}

#[test]
fn no_ranges_resolves_to_none() {
    assert_eq!(resolve_click(Some(0), &[], &[]), None);
}

#[test]
fn disabled_at_resolution_time_blocks_click() {
    let status = Rc::new(Cell::new(ButtonStatus::Default));
    let buttons = vec![Button::new(0..5).with_status_provider({
        let status = status.clone();
        move || status.get()
    })];
    let ranges = [TextRange::new(0, 5)];

    assert_eq!(resolve_click(Some(2), &ranges, &buttons), Some(0));
    status.set(ButtonStatus::Disabled);
    assert_eq!(resolve_click(Some(2), &ranges, &buttons), None);
}

#[test]
fn only_the_hit_button_status_is_sampled() {
    let samples = Rc::new(Cell::new(0));
    let counting = |samples: Rc<Cell<usize>>| {
        move || {
            samples.set(samples.get() + 1);
            ButtonStatus::Default
        }
    };
    let buttons = vec![
        Button::new(0..5).with_status_provider(counting(samples.clone())),
        Button::new(10..15).with_status_provider(counting(samples.clone())),
    ];
    let ranges = [TextRange::new(0, 5), TextRange::new(10, 15)];

    assert_eq!(resolve_click(Some(11), &ranges, &buttons), Some(1));
    assert_eq!(samples.get(), 1);
    assert_eq!(resolve_click(Some(7), &ranges, &buttons), None);
    assert_eq!(samples.get(), 1);
}

#[test]
fn large_lists_resolve_by_search() {
    let ranges: Vec<_> = (0..1_000).map(|i| TextRange::new(i * 3, i * 3 + 2)).collect();
    let buttons: Vec<_> = (0..1_000).map(|i| Button::new(i * 3..i * 3 + 2)).collect();
    assert_eq!(resolve_click(Some(2_998), &ranges, &buttons), Some(999));
    assert_eq!(resolve_click(Some(1_500), &ranges, &buttons), Some(500));
    assert_eq!(resolve_click(Some(1_502), &ranges, &buttons), None);
}
