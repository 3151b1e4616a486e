use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float64Array;

pub mod clipper;
pub mod clipper_config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::constants::DEFAULT_CLEAN_DISTANCE;
use crate::clipper::enums::{PolyFillType, PolyType};
use crate::clipper::utils as clipper_utils;
use crate::clipper_config::ClipperConfig;
use crate::constants::PACKED_HEADER_OFFSET;
use crate::error::{ClipperError, Result};
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::{area, Path, Paths};
use crate::utils::round::round_to_i64;
use crate::utils::wasm_logger::init_logger;

/// Flat `x, y` pairs rounded onto the integer grid. A trailing odd value is ignored.
fn from_f64_mem_seg(mem_seg: &[f64]) -> Path {
    mem_seg
        .chunks_exact(2)
        .map(|chunk| IntPoint::new(round_to_i64(chunk[0]), round_to_i64(chunk[1])))
        .collect()
}

/// Decodes `[count, offset_0 .. offset_{n-1}, x0, y0, ...]`; offsets are relative to the data section.
/// Entries pointing outside the buffer are skipped.
pub fn unpack_paths(buff: &[f64]) -> Paths {
    let Some(&count) = buff.first() else {
        return Vec::new();
    };

    let count = count.max(0.0) as usize;
    let data_start = PACKED_HEADER_OFFSET + count;
    if data_start > buff.len() {
        return Vec::new();
    }

    let offsets = &buff[PACKED_HEADER_OFFSET..data_start];
    let data = &buff[data_start..];
    let mut result = Vec::with_capacity(count);

    for (i, &offset) in offsets.iter().enumerate() {
        let start = offset.max(0.0) as usize;
        let end = offsets
            .get(i + 1)
            .map_or(data.len(), |&next| next.max(0.0) as usize);

        if let Some(segment) = data.get(start..end) {
            result.push(from_f64_mem_seg(segment));
        }
    }

    result
}

pub fn pack_paths(paths: &[Path]) -> Vec<f64> {
    let count = paths.len();
    let total_points: usize = paths.iter().map(|path| path.len()).sum();
    let header_len = PACKED_HEADER_OFFSET + count;

    let mut out = Vec::with_capacity(header_len + total_points * 2);
    out.push(count as f64);

    let mut running: usize = 0;
    for path in paths {
        out.push(running as f64);
        running += path.len() * 2;
    }

    for pt in paths.iter().flatten() {
        out.push(pt.x as f64);
        out.push(pt.y as f64);
    }

    debug_assert_eq!(out.len(), header_len + total_points * 2);
    out
}

fn to_js_error(error: ClipperError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn to_float64_array(data: &[f64]) -> Float64Array {
    let out = Float64Array::new_with_length(data.len() as u32);
    out.copy_from(data);
    out
}

/// Clips packed subject paths against packed clip paths with the operation encoded in `config`.
pub fn clip_paths_inner(subject: &[f64], clip: &[f64], config: u32) -> Result<Vec<f64>> {
    let config = ClipperConfig::from_packed(config)?;
    let mut clipper = Clipper::from_config(&config);

    clipper.add_paths(&unpack_paths(subject), PolyType::Subject, true)?;
    clipper.add_paths(&unpack_paths(clip), PolyType::Clip, true)?;

    let result = clipper
        .execute(config.clip_type, config.subj_fill_type, config.clip_fill_type)?
        .unwrap_or_default();

    Ok(pack_paths(&result))
}

#[wasm_bindgen]
pub fn clip_paths_wasm(subject: &[f64], clip: &[f64], config: u32) -> std::result::Result<Float64Array, JsValue> {
    clip_paths_inner(subject, clip, config)
        .map(|result| to_float64_array(&result))
        .map_err(to_js_error)
}

pub fn offset_paths_inner(paths: &[f64], delta: f64, config: u32) -> Result<Vec<f64>> {
    let config = ClipperConfig::from_packed(config)?;
    let mut clipper_offset = ClipperOffset::from_config(&config);

    clipper_offset.add_paths(&unpack_paths(paths), config.join_type, config.end_type);

    Ok(pack_paths(&clipper_offset.execute(delta)?))
}

#[wasm_bindgen]
pub fn offset_paths_wasm(paths: &[f64], delta: f64, config: u32) -> std::result::Result<Float64Array, JsValue> {
    offset_paths_inner(paths, delta, config)
        .map(|result| to_float64_array(&result))
        .map_err(to_js_error)
}

pub fn simplify_paths_inner(paths: &[f64], fill_type: u8) -> Result<Vec<f64>> {
    let fill_type = PolyFillType::try_from(u16::from(fill_type))?;
    let result = clipper_utils::simplify_polygons(&unpack_paths(paths), fill_type)?;

    Ok(pack_paths(&result))
}

#[wasm_bindgen]
pub fn simplify_paths_wasm(paths: &[f64], fill_type: u8) -> std::result::Result<Float64Array, JsValue> {
    simplify_paths_inner(paths, fill_type)
        .map(|result| to_float64_array(&result))
        .map_err(to_js_error)
}

/// Paths that clean down to nothing are dropped. A non-positive `distance` uses the default.
pub fn clean_paths_inner(paths: &[f64], distance: f64) -> Result<Vec<f64>> {
    let distance = if distance > 0.0 { distance } else { DEFAULT_CLEAN_DISTANCE };
    let cleaned: Paths = clipper_utils::clean_polygons(&unpack_paths(paths), distance)?
        .into_iter()
        .filter(|path| !path.is_empty())
        .collect();

    Ok(pack_paths(&cleaned))
}

#[wasm_bindgen]
pub fn clean_paths_wasm(paths: &[f64], distance: f64) -> std::result::Result<Float64Array, JsValue> {
    clean_paths_inner(paths, distance)
        .map(|result| to_float64_array(&result))
        .map_err(to_js_error)
}

/// `pattern` and `path` are flat `x, y` buffers.
pub fn minkowski_sum_inner(pattern: &[f64], path: &[f64], closed: bool) -> Result<Vec<f64>> {
    let result = clipper_utils::minkowski_sum(
        &from_f64_mem_seg(pattern),
        &from_f64_mem_seg(path),
        closed,
    )?;

    Ok(pack_paths(&result))
}

#[wasm_bindgen]
pub fn minkowski_sum_wasm(pattern: &[f64], path: &[f64], closed: bool) -> std::result::Result<Float64Array, JsValue> {
    minkowski_sum_inner(pattern, path, closed)
        .map(|result| to_float64_array(&result))
        .map_err(to_js_error)
}

pub fn minkowski_diff_inner(poly1: &[f64], poly2: &[f64]) -> Result<Vec<f64>> {
    let result =
        clipper_utils::minkowski_diff(&from_f64_mem_seg(poly1), &from_f64_mem_seg(poly2))?;

    Ok(pack_paths(&result))
}

#[wasm_bindgen]
pub fn minkowski_diff_wasm(poly1: &[f64], poly2: &[f64]) -> std::result::Result<Float64Array, JsValue> {
    minkowski_diff_inner(poly1, poly2)
        .map(|result| to_float64_array(&result))
        .map_err(to_js_error)
}

#[wasm_bindgen]
pub fn polygon_area_wasm(path: &[f64]) -> f64 {
    area(&from_f64_mem_seg(path))
}

#[wasm_bindgen]
pub fn init_logger_wasm(verbose: bool) {
    init_logger(if verbose { Level::TRACE } else { Level::WARN });
}
