//! Approximate byte costs of command payloads.
//!
//! These numbers only drive the history's memory budget. They are estimates
//! and are not validated: negative or absurd inputs are the caller's problem.

use crate::{Image, Position, Selection};

/// Signed 64 bit so summing many large images can not overflow.
pub type SizeType = i64;

/// Rounds depths above 8 bits up to whole bytes, matching how padded pixel
/// formats are laid out in memory.
pub fn rounded_depth(depth: i32) -> SizeType {
    let depth = SizeType::from(depth);
    if depth > 8 {
        ((depth + 7) / 8) * 8
    } else {
        depth
    }
}

pub fn image_size_raw(width: i32, height: i32, depth: i32) -> SizeType {
    SizeType::from(width) * SizeType::from(height) * rounded_depth(depth) / 8
}

pub fn image_size(image: &Image) -> SizeType {
    if image.is_null() {
        return 0;
    }
    image_size_raw(image.width(), image.height(), image.depth())
}

pub fn optional_image_size(image: Option<&Image>) -> SizeType {
    image.map_or(0, image_size)
}

pub fn selection_size(selection: &Selection) -> SizeType {
    selection.size()
}

pub fn optional_selection_size(selection: Option<&Selection>) -> SizeType {
    selection.map_or(0, selection_size)
}

pub fn string_size(text: &str) -> SizeType {
    text.chars().count() as SizeType * std::mem::size_of::<char>() as SizeType
}

pub fn strings_size(lines: &[String]) -> SizeType {
    lines.iter().map(|line| string_size(line)).sum()
}

pub fn polygon_size(points: &[Position]) -> SizeType {
    points.len() as SizeType * std::mem::size_of::<Position>() as SizeType
}
