//! Cursor previews that show the picked color around the pick point.
//!
//! The color math never depends on how a preview looks. A UI holds any
//! [`CursorPreview`], pushes the current color and magnifier image into it
//! and fills the [`Outline`] it returns.

use euclid::default::{Point2D, Rect, Size2D};

use crate::{models::Rgba, pixel::PixelBuffer, Component};

/// Side of the square a cursor preview is drawn in.
pub const SIDE_WIDTH: Component = 130.0;

/// Distance between the preview frame and its outline.
pub const EDGE_INSET: Component = 3.0;

/// Line segments used to flatten a curve.
const CURVE_SEGMENTS: usize = 16;

/// Line segments used for a full circle.
const CIRCLE_SEGMENTS: usize = 64;

/// A filled shape made of closed contours, filled with the even-odd rule so
/// inner contours cut holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    contours: Vec<Vec<Point2D<Component>>>,
}

impl Outline {
    /// Create an outline from closed contours. The last point of every
    /// contour connects back to the first.
    pub fn new(contours: Vec<Vec<Point2D<Component>>>) -> Self {
        Self { contours }
    }

    /// The closed contours.
    pub fn contours(&self) -> &[Vec<Point2D<Component>>] {
        &self.contours
    }

    /// Smallest rectangle containing every point.
    pub fn bounds(&self) -> Rect<Component> {
        Rect::from_points(self.contours.iter().flatten())
    }

    /// Whether `point` is inside the shape using the even-odd rule.
    pub fn contains(&self, point: Point2D<Component>) -> bool {
        let mut inside = false;
        for contour in &self.contours {
            let Some(mut prev) = contour.last().copied() else {
                continue;
            };
            for &next in contour {
                if (next.y > point.y) != (prev.y > point.y) {
                    let t = (point.y - next.y) / (prev.y - next.y);
                    if point.x < next.x + t * (prev.x - next.x) {
                        inside = !inside;
                    }
                }
                prev = next;
            }
        }
        inside
    }
}

/// What a UI needs from a cursor preview.
pub trait CursorPreview {
    /// Update the color the preview is filled with.
    fn set_color(&mut self, color: Rgba);

    /// Update the magnified image shown in the preview.
    fn set_magnified_image(&mut self, image: Option<PixelBuffer>);

    /// The color the preview is filled with.
    fn color(&self) -> Rgba;

    /// The magnified image shown in the preview, if any.
    fn magnified_image(&self) -> Option<&PixelBuffer>;

    /// The shape to fill, in the preview's own coordinate space.
    fn outline_path(&self) -> Outline;
}

/// Frame the outline of a preview is drawn in.
fn inset_frame() -> Rect<Component> {
    Rect::new(Point2D::origin(), Size2D::new(SIDE_WIDTH, SIDE_WIDTH))
        .inflate(-EDGE_INSET, -EDGE_INSET)
}

macro_rules! preview_state {
    ($name:ident) => {
        impl CursorPreview for $name {
            fn set_color(&mut self, color: Rgba) {
                self.color = color;
            }

            fn set_magnified_image(&mut self, image: Option<PixelBuffer>) {
                self.magnified = image;
            }

            fn color(&self) -> Rgba {
                self.color
            }

            fn magnified_image(&self) -> Option<&PixelBuffer> {
                self.magnified.as_ref()
            }

            fn outline_path(&self) -> Outline {
                Self::outline()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    color: Rgba::WHITE,
                    magnified: None,
                }
            }
        }
    };
}

/// A round preview filling its inset frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularPreview {
    color: Rgba,
    magnified: Option<PixelBuffer>,
}

impl CircularPreview {
    fn outline() -> Outline {
        let frame = inset_frame();
        let center = frame.center();
        let radius = frame.width() / 2.0;
        let step = std::f64::consts::TAU as Component / CIRCLE_SEGMENTS as Component;
        let circle = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = step * i as Component;
                Point2D::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        Outline::new(vec![circle])
    }
}

preview_state!(CircularPreview);

/// A drop shaped preview with a round window where the magnified image
/// shows through.
#[derive(Clone, Debug, PartialEq)]
pub struct DropletPreview {
    color: Rgba,
    magnified: Option<PixelBuffer>,
}

/// Side of the square the droplet curves are designed in.
const DROPLET_DESIGN_SIDE: Component = 150.0;

type Cubic = [(Component, Component); 3];

/// Inner window: start point and cubic segments (control, control, end).
const DROPLET_WINDOW: ((Component, Component), [Cubic; 5]) = (
    (75.0, 30.0),
    [
        [(67.73, 30.0), (60.87, 31.72), (54.79, 34.78)],
        [(40.09, 42.18), (30.0, 57.41), (30.0, 75.0)],
        [(30.0, 99.85), (50.15, 120.0), (75.0, 120.0)],
        [(99.85, 120.0), (120.0, 99.85), (120.0, 75.0)],
        [(120.0, 50.15), (99.85, 30.0), (75.0, 30.0)],
    ],
);

/// Outer drop: start point and cubic segments (control, control, end).
const DROPLET_BODY: ((Component, Component), [Cubic; 5]) = (
    (150.0, 75.0),
    [
        [(150.0, 116.42), (116.42, 150.0), (75.0, 150.0)],
        [(33.58, 150.0), (0.0, 116.42), (0.0, 75.0)],
        [(0.0, 50.53), (11.71, 28.8), (29.84, 15.11)],
        [(42.4, 5.63), (58.04, 0.0), (75.0, 0.0)],
        [(116.42, 0.0), (150.0, 33.58), (150.0, 75.0)],
    ],
);

/// Flatten a chain of cubic curves into points, mapped through `map`.
fn flatten(
    start: (Component, Component),
    curves: &[Cubic],
    map: impl Fn((Component, Component)) -> Point2D<Component>,
) -> Vec<Point2D<Component>> {
    let mut from = map(start);
    let mut points = vec![from];
    for curve in curves {
        let [c1, c2, to] = curve.map(&map);
        for i in 1..CURVE_SEGMENTS {
            let t = i as Component / CURVE_SEGMENTS as Component;
            let a = from.lerp(c1, t);
            let b = c1.lerp(c2, t);
            let c = c2.lerp(to, t);
            let ab = a.lerp(b, t);
            let bc = b.lerp(c, t);
            points.push(ab.lerp(bc, t));
        }
        points.push(to);
        from = to;
    }
    // Contours are implicitly closed.
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

impl DropletPreview {
    fn outline() -> Outline {
        let frame = inset_frame();
        let scale = frame.width() / DROPLET_DESIGN_SIDE;
        let map = |(x, y): (Component, Component)| {
            Point2D::new(frame.min_x() + x * scale, frame.min_y() + y * scale)
        };

        let (start, curves) = DROPLET_WINDOW;
        let window = flatten(start, &curves, map);

        let (start, curves) = DROPLET_BODY;
        let body = flatten(start, &curves, map);

        Outline::new(vec![body, window])
    }
}

preview_state!(DropletPreview);
