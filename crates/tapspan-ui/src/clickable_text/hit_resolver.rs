use tapspan_foundation::TextRange;

use super::button::{Button, ButtonStatus};

/// Maps a composed offset back to the index of the button it belongs to.
///
/// `click_ranges` must be sorted and non-overlapping, which the segment
/// builder guarantees. The matched button's status is sampled here, at
/// resolution time; a disabled button resolves to `None` exactly like a miss.
pub fn resolve_click(
    offset: Option<usize>,
    click_ranges: &[TextRange],
    buttons: &[Button],
) -> Option<usize> {
    let offset = offset?;
    let index = click_ranges.partition_point(|range| range.end <= offset);
    let range = click_ranges.get(index)?;
    if !range.contains(offset) {
        return None;
    }
    match buttons.get(index)?.status() {
        ButtonStatus::Disabled => {
            log::trace!("offset {offset} hit disabled button {index}");
            None
        }
        ButtonStatus::Default => Some(index),
    }
}

#[cfg(test)]
#[path = "tests/hit_resolver_tests.rs"]
mod tests;
