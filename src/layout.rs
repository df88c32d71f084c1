//! Pointer and overlay coordinate mapping
//!
//! The map image renders "contain"-fitted inside a variable-size container,
//! so the rectangle it actually occupies (the image box) is letterboxed
//! whenever the aspect ratios differ. Pointer positions arrive in
//! container-relative pixels and convert to percentages of the image box;
//! overlay placement goes back the other way. Both directions are pure
//! functions usable without any windowing dependency.

use glam::Vec2;

use crate::clamp_percent;

/// The letterboxed rectangle the image occupies within its container, in
/// container-relative pixels.
///
/// Ephemeral: recompute whenever the container size or the image's natural
/// size changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the contain-fit image box for a container.
///
/// A container with no extent yields `None`; callers skip hit-testing and
/// overlay placement for that frame. While the image's natural size is
/// unknown (still loading) or reported as zero, the box fills the whole
/// container. Otherwise the axis whose aspect ratio dominates is fit to the
/// container and the other axis is centered with equal margins.
pub fn compute_image_box(container: Vec2, natural: Option<Vec2>) -> Option<ImageBox> {
    if container.x <= 0.0 || container.y <= 0.0 {
        return None;
    }

    let Some(natural) = natural.filter(|n| n.x > 0.0 && n.y > 0.0) else {
        return Some(ImageBox {
            left: 0.0,
            top: 0.0,
            width: container.x,
            height: container.y,
        });
    };

    let container_ratio = container.x / container.y;
    let image_ratio = natural.x / natural.y;

    let (width, height) = if image_ratio > container_ratio {
        // Wider than the container: fit width, letterbox top/bottom
        (container.x, container.x / image_ratio)
    } else {
        // Taller (or equal): fit height, letterbox left/right
        (container.y * image_ratio, container.y)
    };

    Some(ImageBox {
        left: (container.x - width) / 2.0,
        top: (container.y - height) / 2.0,
        width,
        height,
    })
}

/// Convert a container-relative pointer position to image percentages,
/// clamped to [0, 100] on each axis.
pub fn to_percent(pointer: Vec2, image_box: &ImageBox) -> Vec2 {
    Vec2::new(
        clamp_percent((pointer.x - image_box.left) / image_box.width * 100.0),
        clamp_percent((pointer.y - image_box.top) / image_box.height * 100.0),
    )
}

/// Inverse of [`to_percent`]: place a percent position in container pixels,
/// for overlay placement.
pub fn to_absolute(percent: Vec2, image_box: &ImageBox) -> Vec2 {
    Vec2::new(
        image_box.left + image_box.width * percent.x / 100.0,
        image_box.top + image_box.height * percent.y / 100.0,
    )
}
