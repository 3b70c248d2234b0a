use common::rating::RatingRecord;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdStar, MdStarBorder, MdStarHalf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StarFill {
    Full,
    Half,
    Empty,
}

/// Fill of the `index`-th star (0-based) for an average, rounded to halves.
fn star_fill(average: f64, index: u8) -> StarFill {
    let halves = (average * 2.0).round() as i64;
    let full_at = (index as i64 + 1) * 2;
    if halves >= full_at {
        StarFill::Full
    } else if halves == full_at - 1 {
        StarFill::Half
    } else {
        StarFill::Empty
    }
}

#[component]
pub fn StarRow(average: f64, #[props(default = 18)] size: u32) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; flex-direction: row; align-items: center;",
            for index in 0..5_u8 {
                StarIcon { key: "{index}", fill: star_fill(average, index), size }
            }
        }
    }
}

#[component]
fn StarIcon(fill: StarFill, size: u32) -> Element {
    let style = format!("width: {size}px; height: {size}px; color: #FFCB05; flex-shrink: 0;");
    match fill {
        StarFill::Full => rsx! { Icon { icon: MdStar, style } },
        StarFill::Half => rsx! { Icon { icon: MdStarHalf, style } },
        StarFill::Empty => rsx! { Icon { icon: MdStarBorder, style } },
    }
}

/// Stars with average and count, or "No reviews yet" for an unreviewed space.
#[component]
pub fn RatingSummary(record: RatingRecord, #[props(default = false)] loading: bool) -> Element {
    if loading && !record.has_reviews() {
        return rsx! {
            span { style: "color: #6B7280; font-size: 14px;", "Loading ratings..." }
        };
    }
    let Some(average) = record.display_average() else {
        return rsx! {
            span { style: "color: #6B7280; font-size: 14px;", "No reviews yet" }
        };
    };
    let noun = if record.review_count == 1 { "review" } else { "reviews" };
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; gap: 6px; font-size: 14px; color: #111827;",
            StarRow { average }
            span { style: "font-weight: 500;", "{average:.1}" }
            span { style: "color: #6B7280;", "({record.review_count} {noun})" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fills(average: f64) -> Vec<StarFill> {
        (0..5).map(|i| star_fill(average, i)).collect()
    }

    #[test]
    fn rounds_to_half_stars() {
        use StarFill::*;
        assert_eq!(fills(4.5), vec![Full, Full, Full, Full, Half]);
        assert_eq!(fills(3.2), vec![Full, Full, Full, Empty, Empty]);
        assert_eq!(fills(3.3), vec![Full, Full, Full, Half, Empty]);
        assert_eq!(fills(0.0), vec![Empty; 5]);
        assert_eq!(fills(5.0), vec![Full; 5]);
    }
}
