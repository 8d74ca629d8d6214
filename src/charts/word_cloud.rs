//! Word Cloud Layout
//! Places words on a canvas along an outward spiral, font size by frequency.
//!
//! The layout is independent of any drawing backend: callers pass a measuring
//! function so the egui painter and the plotters bitmap use their own metrics.

use crate::analysis::WordCount;

/// Axis-aligned box in canvas pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CloudRect {
    fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn intersects(&self, other: &CloudRect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn inside(&self, width: f32, height: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub font_size: f32,
    pub rect: CloudRect,
    /// Position in the input list, used for coloring
    pub rank: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct CloudOptions {
    pub min_font: f32,
    pub max_font: f32,
    /// Radius gained per radian of spiral
    pub spiral_step: f32,
    /// Factor applied to the font when a word does not fit
    pub shrink: f32,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            min_font: 10.0,
            max_font: 72.0,
            spiral_step: 2.0,
            shrink: 0.85,
        }
    }
}

const ANGLE_STEP: f32 = 0.2;

/// Lay out `words` (highest count first) on a `width` x `height` canvas.
///
/// `measure(word, font_size)` returns the rendered `(width, height)` of a word.
/// Words that do not fit even at `min_font` are left out. Font sizes never
/// grow along the input order.
pub fn layout_word_cloud<F>(
    words: &[WordCount],
    width: f32,
    height: f32,
    options: &CloudOptions,
    mut measure: F,
) -> Vec<PlacedWord>
where
    F: FnMut(&str, f32) -> (f32, f32),
{
    if words.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let max_font = options.max_font.min(height / 4.0).max(options.min_font);
    let c_max = words.iter().map(|w| w.count).max().unwrap_or(1);
    let c_min = words.iter().map(|w| w.count).min().unwrap_or(1);

    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
    let mut last_size = max_font;

    for (rank, entry) in words.iter().enumerate() {
        let scale = if c_max == c_min {
            1.0
        } else {
            (entry.count - c_min) as f32 / (c_max - c_min) as f32
        };
        let mut size = (options.min_font + (max_font - options.min_font) * scale).min(last_size);

        while size >= options.min_font {
            let (w, h) = measure(&entry.word, size);
            if let Some(rect) = find_slot(&placed, w, h, width, height, options.spiral_step) {
                placed.push(PlacedWord {
                    word: entry.word.clone(),
                    font_size: size,
                    rect,
                    rank,
                });
                last_size = size;
                break;
            }
            size *= options.shrink;
        }
    }

    placed
}

/// Walk an Archimedean spiral from the canvas center until a free slot appears.
fn find_slot(
    placed: &[PlacedWord],
    w: f32,
    h: f32,
    width: f32,
    height: f32,
    spiral_step: f32,
) -> Option<CloudRect> {
    if w > width || h > height {
        return None;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = width / height;
    let max_radius = (cx * cx + cy * cy).sqrt();
    let mut theta = 0.0f32;

    loop {
        let radius = spiral_step * theta;
        if radius > max_radius * aspect.max(1.0) {
            return None;
        }
        let px = cx + radius * theta.cos();
        let py = cy + radius * theta.sin() / aspect.max(1.0);
        let rect = CloudRect::centered(px, py, w, h);

        if rect.inside(width, height) && !placed.iter().any(|p| p.rect.intersects(&rect)) {
            return Some(rect);
        }
        theta += ANGLE_STEP;
    }
}

/// Measurement used when no font metrics are available.
pub fn estimate_text_size(word: &str, font_size: f32) -> (f32, f32) {
    (word.chars().count() as f32 * font_size * 0.6, font_size * 1.2)
}
