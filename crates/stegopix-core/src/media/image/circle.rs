//! Sites on the discrete circle inscribed into the image.
//!
//! The circle is rasterized with the integer midpoint algorithm and walked by angle
//! around its center, every point carries one bit per channel.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::media::{Geometry, Site};

/// direction in which the circle points are walked, in image coordinates (y pointing down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CircleDirection {
    /// ascending angle, clockwise on screen
    #[default]
    Clockwise,
    /// descending angle
    CounterClockwise,
}

/// center and radius of the largest circle that fits into the image
pub fn inscribed_circle(width: usize, height: usize) -> Option<((usize, usize), usize)> {
    if width == 0 || height == 0 {
        return None;
    }
    let center = ((width - 1) / 2, (height - 1) / 2);

    Some((center, center.0.min(center.1)))
}

/// the deduplicated pixel set of the midpoint circle around `center`
pub fn midpoint_circle(center: (usize, usize), radius: usize) -> BTreeSet<(usize, usize)> {
    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let mut x = radius as i64;
    let mut y = 0i64;
    let mut perimeter = 1 - x;
    let mut points = BTreeSet::new();

    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            // the radius never exceeds the center coordinates, so nothing is negative here
            points.insert(((cx + dx) as usize, (cy + dy) as usize));
        }

        y += 1;
        if perimeter <= 0 {
            perimeter += 2 * y + 1;
        } else {
            x -= 1;
            perimeter += 2 * y - 2 * x + 1;
        }
    }

    points
}

/// circle points ordered by their angle around the center
pub fn circle_points(width: usize, height: usize, direction: CircleDirection) -> Vec<(usize, usize)> {
    let Some((center, radius)) = inscribed_circle(width, height) else {
        return Vec::new();
    };
    let angle = |&(x, y): &(usize, usize)| {
        let a = (y as f64 - center.1 as f64).atan2(x as f64 - center.0 as f64);
        match direction {
            CircleDirection::Clockwise => a,
            CircleDirection::CounterClockwise => -a,
        }
    };

    let mut points: Vec<_> = midpoint_circle(center, radius).into_iter().collect();
    // the set order breaks ties of equal angles, which keeps the walk reproducible
    points.sort_by(|a, b| angle(a).partial_cmp(&angle(b)).unwrap_or(Ordering::Equal));

    points
}

/// every channel of every circle point, in walk order
pub fn circle_sites(geometry: &Geometry, direction: CircleDirection) -> Vec<Site> {
    circle_points(geometry.width, geometry.height, direction)
        .into_iter()
        .flat_map(|(x, y)| (0..geometry.channels).map(move |channel| Site { x, y, channel }))
        .collect()
}
