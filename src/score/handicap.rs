use ahash::RandomState;
use std::collections::HashMap;

use crate::model::snapshot::STANDARD_SLOPE_RATING;
use crate::model::{CourseRating, Entrant, EntrantId};

/// Handicap strokes on a single hole never exceed this, however high the course handicap.
pub const MAX_STROKES_PER_HOLE: i32 = 2;

/// Course handicap from a handicap index: `index * slope / 113 + (course_rating - par)`,
/// rounded half up (14.5 -> 15, 14.4 -> 14).
#[must_use]
pub fn compute_course_handicap(
    handicap_index: f64,
    slope_rating: i32,
    course_rating: f64,
    par: i32,
) -> i32 {
    let raw = handicap_index * (f64::from(slope_rating) / f64::from(STANDARD_SLOPE_RATING))
        + (course_rating - f64::from(par));
    round_half_up(raw)
}

fn round_half_up(value: f64) -> i32 {
    // absorbs float noise such as 14.499999999 coming out of the slope ratio
    let value = (value * 1e9).round() / 1e9;
    (value + 0.5).floor() as i32
}

/// Handicap strokes received on a hole.
///
/// The course handicap is spread evenly over `total_holes`; the remainder goes to the
/// hardest holes (lowest stroke index). Capped at [`MAX_STROKES_PER_HOLE`].
#[must_use]
pub fn strokes_on_hole(course_handicap: i32, stroke_index: Option<i32>, total_holes: i32) -> i32 {
    let Some(stroke_index) = stroke_index else {
        return 0;
    };
    if course_handicap <= 0 || total_holes <= 0 {
        return 0;
    }

    let base = course_handicap / total_holes;
    let remainder = course_handicap % total_holes;
    let extra = i32::from(stroke_index <= remainder);

    (base + extra).min(MAX_STROKES_PER_HOLE)
}

/// Course handicap for every player entrant. Groups play gross and are left out.
#[must_use]
pub fn course_handicaps(
    entrants: &[Entrant],
    course: &CourseRating,
    par: i32,
) -> HashMap<EntrantId, i32, RandomState> {
    let slope = course.slope();
    let rating = course.rating_or_par(par);

    entrants
        .iter()
        .filter_map(|entrant| match entrant {
            Entrant::Player(player) => Some((
                player.id,
                compute_course_handicap(player.effective_handicap_index(), slope, rating, par),
            )),
            Entrant::Group(_) => None,
        })
        .collect()
}
