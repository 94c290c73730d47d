//! Overlay side-channel for the renderer: banner text, colors and targeted
//! joint annotations in screen space.
//!
//! Nothing here draws; the renderer decides how to paint these.

use crate::{
    constants::{ANNOTATION_OFFSET_X, ANNOTATION_OFFSET_Y, BANNER_Y},
    form::PostureStatus,
    landmarks::{Landmark, LandmarkIndex},
};
use serde::{Serialize, Serializer};
use std::fmt;

/// 8-bit RGB color, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const ORANGE: Self = Self::new(0xFF, 0x9F, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    pub const WARNING_RED: Self = Self::new(0xFF, 0x31, 0x31);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Headline posture message, centered at the top of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostureBanner {
    pub status: PostureStatus,
    pub message: &'static str,
    pub color: Color,
}

impl PostureBanner {
    /// Banner shown whenever the body is not fully observed
    #[must_use]
    pub fn out_of_frame() -> Self {
        Self {
            status: PostureStatus::OutOfFrame,
            message: "📸 Please come fully in frame",
            color: Color::ORANGE,
        }
    }

    /// Pixel anchor of the banner text
    #[must_use]
    pub fn pixel_position(&self, canvas_width: u32) -> (i32, i32) {
        (to_pixel_coord(f64::from(canvas_width) / 2.0), BANNER_Y)
    }
}

/// Short text placed next to the joint that failed a form rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JointAnnotation {
    pub text: &'static str,
    pub anchor: LandmarkIndex,
    /// Normalized landmark position the annotation hangs off
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl JointAnnotation {
    #[must_use]
    pub fn at(text: &'static str, anchor: LandmarkIndex, landmark: &Landmark) -> Self {
        Self {
            text,
            anchor,
            x: landmark.x,
            y: landmark.y,
            color: Color::WARNING_RED,
        }
    }

    /// Pixel position of the text: the projected landmark nudged up and right
    #[must_use]
    pub fn pixel_position(&self, canvas_width: u32, canvas_height: u32) -> (i32, i32) {
        let (px, py) = project_to_pixel(self.x, self.y, canvas_width, canvas_height);
        (
            px.saturating_add(ANNOTATION_OFFSET_X),
            py.saturating_add(ANNOTATION_OFFSET_Y),
        )
    }
}

/// Everything the renderer paints on top of the video for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    pub banner: PostureBanner,
    /// Skeleton connectors and landmarks share the banner color
    pub skeleton_color: Color,
    pub annotation: Option<JointAnnotation>,
}

impl Overlay {
    #[must_use]
    pub fn new(banner: PostureBanner, annotation: Option<JointAnnotation>) -> Self {
        Self {
            banner,
            skeleton_color: banner.color,
            annotation,
        }
    }

    #[must_use]
    pub fn out_of_frame() -> Self {
        Self::new(PostureBanner::out_of_frame(), None)
    }
}

/// Map normalized coordinates onto a canvas of the given size
#[must_use]
pub fn project_to_pixel(x: f32, y: f32, canvas_width: u32, canvas_height: u32) -> (i32, i32) {
    (
        to_pixel_coord(f64::from(x) * f64::from(canvas_width)),
        to_pixel_coord(f64::from(y) * f64::from(canvas_height)),
    )
}

/// Truncate to a pixel coordinate; non-finite values map to 0
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
fn to_pixel_coord(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
