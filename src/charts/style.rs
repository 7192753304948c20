//! Shared styling for the benchmark figures.

use plotters::prelude::*;
use plotters::style::full_palette::PURPLE;

/// Dashed-green shades for the estimated CXL series, light to dark.
pub const ESTIMATE_GREENS: [RGBColor; 3] = [
    RGBColor(0x88, 0xe4, 0x88),
    RGBColor(0x5a, 0xc2, 0x5a),
    RGBColor(0x2c, 0xa0, 0x2c),
];

/// One colour per memory tier for empirical line series.
pub const TIER_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, PURPLE];

/// Colour of the vertical core-boundary guides.
pub const GUIDE_COLOR: RGBColor = RED;

pub const LABEL_FONT: (&str, u32) = ("sans-serif", 18);
pub const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
