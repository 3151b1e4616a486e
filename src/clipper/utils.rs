use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_base::check_full_range;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::error::Result;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::{orientation, Path, Paths};
use crate::utils::math::cycle_index;

/// Splits self-intersecting input into strictly simple polygons.
pub fn simplify_polygon(path: &[IntPoint], fill_type: PolyFillType) -> Result<Paths> {
    let mut clipper = Clipper::new(false, true);
    clipper.add_path(path, PolyType::Subject, true)?;

    Ok(clipper
        .execute(ClipType::Union, fill_type, fill_type)?
        .unwrap_or_default())
}

pub fn simplify_polygons(paths: &[Path], fill_type: PolyFillType) -> Result<Paths> {
    let mut clipper = Clipper::new(false, true);
    clipper.add_paths(paths, PolyType::Subject, true)?;

    Ok(clipper
        .execute(ClipType::Union, fill_type, fill_type)?
        .unwrap_or_default())
}

/// Unlinks `index` and returns its predecessor, which must be revisited.
fn exclude_point(index: usize, next: &mut [usize], prev: &mut [usize], marked: &mut [bool]) -> usize {
    let result = prev[index];
    let after = next[index];

    next[result] = after;
    prev[after] = result;
    marked[result] = false;

    result
}

/// Removes vertices that are within `distance` of a neighbour or nearly collinear with both.
/// Returns an empty path when fewer than three vertices survive.
pub fn clean_polygon(path: &[IntPoint], distance: f64) -> Result<Path> {
    check_full_range(path)?;

    let mut point_count = path.len();
    if point_count == 0 {
        return Ok(Vec::new());
    }

    let mut next: Vec<usize> = (0..point_count)
        .map(|i| cycle_index(i, point_count, 1))
        .collect();
    let mut prev: Vec<usize> = (0..point_count)
        .map(|i| cycle_index(i, point_count, -1))
        .collect();
    let mut marked: Vec<bool> = vec![false; point_count];

    let dist_sqrd = distance * distance;
    let mut curr_index = 0;

    while !marked[curr_index] && next[curr_index] != prev[curr_index] {
        let prev_index = prev[curr_index];
        let next_index = next[curr_index];

        let curr_point = &path[curr_index];
        let prev_point = &path[prev_index];
        let next_point = &path[next_index];

        if curr_point.close_to(prev_point, dist_sqrd) {
            curr_index = exclude_point(curr_index, &mut next, &mut prev, &mut marked);
            point_count -= 1;
        } else if prev_point.close_to(next_point, dist_sqrd) {
            exclude_point(next_index, &mut next, &mut prev, &mut marked);
            curr_index = exclude_point(curr_index, &mut next, &mut prev, &mut marked);
            point_count -= 2;
        } else if IntPoint::slopes_near_collinear(prev_point, curr_point, next_point, dist_sqrd) {
            curr_index = exclude_point(curr_index, &mut next, &mut prev, &mut marked);
            point_count -= 1;
        } else {
            marked[curr_index] = true;
            curr_index = next_index;
        }
    }

    if point_count < 3 {
        return Ok(Vec::new());
    }

    let mut result = Vec::with_capacity(point_count);
    for _ in 0..point_count {
        result.push(path[curr_index]);
        curr_index = next[curr_index];
    }

    Ok(result)
}

pub fn clean_polygons(paths: &[Path], distance: f64) -> Result<Paths> {
    paths
        .iter()
        .map(|path| clean_polygon(path, distance))
        .collect()
}

/// Quads swept by `pattern` along `path`, each oriented positively.
/// Both inputs must lie in the full range so that the pairwise sums fit in `i64`.
fn minkowski(pattern: &[IntPoint], path: &[IntPoint], is_sum: bool, is_closed: bool) -> Result<Paths> {
    check_full_range(pattern)?;
    check_full_range(path)?;

    let delta = usize::from(is_closed);
    let poly_count = pattern.len();
    let path_count = path.len();

    if poly_count == 0 || path_count == 0 {
        return Ok(Vec::new());
    }

    let swept: Vec<Path> = path
        .iter()
        .map(|origin| {
            pattern
                .iter()
                .map(|pt| if is_sum { origin.add(pt) } else { origin.sub(pt) })
                .collect()
        })
        .collect();

    let mut result = Vec::with_capacity((path_count + delta) * (poly_count + 1));

    for i in 0..(path_count - 1 + delta) {
        let curr = &swept[i % path_count];
        let next = &swept[(i + 1) % path_count];

        for j in 0..poly_count {
            let j_next = (j + 1) % poly_count;
            let mut quad = vec![curr[j], next[j], next[j_next], curr[j_next]];
            if !orientation(&quad) {
                quad.reverse();
            }
            result.push(quad);
        }
    }

    Ok(result)
}

fn union_non_zero(subject: &[Path], clip: &[Path]) -> Result<Paths> {
    let mut clipper = Clipper::default();
    clipper.add_paths(subject, PolyType::Subject, true)?;
    clipper.add_paths(clip, PolyType::Clip, true)?;

    Ok(clipper
        .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)?
        .unwrap_or_default())
}

pub fn minkowski_sum(pattern: &[IntPoint], path: &[IntPoint], path_is_closed: bool) -> Result<Paths> {
    let quads = minkowski(pattern, path, true, path_is_closed)?;

    union_non_zero(&quads, &[])
}

pub fn minkowski_sum_paths(pattern: &[IntPoint], paths: &[Path], path_is_closed: bool) -> Result<Paths> {
    let mut quads = Vec::new();
    let mut translated = Vec::new();

    for path in paths {
        quads.extend(minkowski(pattern, path, true, path_is_closed)?);

        if path_is_closed {
            if let Some(origin) = pattern.first() {
                translated.push(path.iter().map(|pt| pt.add(origin)).collect());
            }
        }
    }

    union_non_zero(&quads, &translated)
}

pub fn minkowski_diff(poly1: &[IntPoint], poly2: &[IntPoint]) -> Result<Paths> {
    let quads = minkowski(poly1, poly2, false, true)?;

    union_non_zero(&quads, &[])
}
