//! Named colors.
//!
//! The categorical colors follow the widely used "tab10" cycle, so `C0` is
//! the familiar muted blue and `C1` the orange.

use glam::Vec4;

pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Vec4 = Vec4::new(0.0, 0.5, 0.0, 1.0);
pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
pub const CYAN: Vec4 = Vec4::new(0.0, 1.0, 1.0, 1.0);

/// Categorical color cycle, `#1f77b4` first.
pub const TAB10: [Vec4; 10] = [
    Vec4::new(0.122, 0.467, 0.706, 1.0),
    Vec4::new(1.0, 0.498, 0.055, 1.0),
    Vec4::new(0.173, 0.627, 0.173, 1.0),
    Vec4::new(0.839, 0.153, 0.157, 1.0),
    Vec4::new(0.580, 0.404, 0.741, 1.0),
    Vec4::new(0.549, 0.337, 0.294, 1.0),
    Vec4::new(0.890, 0.467, 0.761, 1.0),
    Vec4::new(0.498, 0.498, 0.498, 1.0),
    Vec4::new(0.737, 0.741, 0.133, 1.0),
    Vec4::new(0.090, 0.745, 0.812, 1.0),
];

/// `C0`
pub const TAB_BLUE: Vec4 = TAB10[0];
/// `C1`
pub const TAB_ORANGE: Vec4 = TAB10[1];

/// Returns `color` with its alpha replaced.
pub fn with_alpha(color: Vec4, alpha: f32) -> Vec4 {
    color.truncate().extend(alpha)
}
