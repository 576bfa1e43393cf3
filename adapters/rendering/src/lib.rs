#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Bug's Life adapters.
//!
//! The simulation is drawn entirely with circles. [`Scene::from_view`] turns a
//! world view into a flat list of [`CirclePresentation`] values in draw order;
//! backends only need to map the square domain onto their surface through a
//! [`Viewport`].

use anyhow::Result as AnyResult;
use bugs_life_core::{ColonyId, ForagingMode, Position, Tuning, WorldView};
use glam::Vec2;
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Opaque black, used for food and outlines.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white, used as the background.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Color assigned to a colony; the palette repeats after ten colonies.
    #[must_use]
    pub const fn for_colony(colony: ColonyId) -> Self {
        COLONY_PALETTE[colony.get() as usize % COLONY_PALETTE.len()]
    }

    /// Byte RGB channels, rounded to the nearest value.
    #[must_use]
    pub fn to_rgb_u8(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

const COLONY_PALETTE: [Color; 10] = [
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 0.0, 1.0),
    Color::new(0.0, 0.0, 1.0, 1.0),
    Color::new(1.0, 0.0, 1.0, 1.0),
    Color::new(0.0, 1.0, 1.0, 1.0),
    Color::new(1.0, 1.0, 0.0, 1.0),
    Color::new(0.34, 0.16, 0.0, 1.0),
    Color::new(1.0, 0.5, 0.0, 1.0),
    Color::new(0.5, 0.5, 0.5, 1.0),
    Color::new(0.992, 0.424, 0.62, 1.0),
];

/// How a circle is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircleStyle {
    /// Solid disc.
    Filled,
    /// Rim only.
    Outline,
}

/// Circle expressed in world units, with the y axis pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePresentation {
    /// Center of the circle.
    pub center: Vec2,
    /// Radius of the circle.
    pub radius: f32,
    /// Fill or stroke color.
    pub color: Color,
    /// Fill or outline.
    pub style: CircleStyle,
}

impl CirclePresentation {
    /// Creates a new circle descriptor.
    #[must_use]
    pub const fn new(center: Vec2, radius: f32, color: Color, style: CircleStyle) -> Self {
        Self {
            center,
            radius,
            color,
            style,
        }
    }
}

/// Scene description listing every circle in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Half width of the square domain, in world units.
    pub half_width: f32,
    /// Circles to draw, back to front.
    pub circles: Vec<CirclePresentation>,
    /// Foraging mode at the time of the snapshot.
    pub mode: ForagingMode,
}

impl Scene {
    /// Builds the scene for a world view.
    ///
    /// Colonies are drawn first as outlines in their palette color, then food
    /// as black outlines, then workers as colored outlines (with a black food
    /// marker when carrying) and finally guards as filled discs with a black
    /// rim.
    #[must_use]
    pub fn from_view(view: &WorldView, tuning: &Tuning) -> Self {
        let ant_radius = tuning.ant_radius as f32;
        let food_radius = tuning.food_radius as f32;
        let mut circles = Vec::new();

        for colony in view.colonies() {
            circles.push(CirclePresentation::new(
                to_vec2(colony.center),
                colony.radius as f32,
                Color::for_colony(colony.id),
                CircleStyle::Outline,
            ));
        }
        for item in view.food() {
            circles.push(CirclePresentation::new(
                to_vec2(item.position),
                food_radius,
                Color::BLACK,
                CircleStyle::Outline,
            ));
        }
        for worker in view.workers() {
            let center = to_vec2(worker.position);
            circles.push(CirclePresentation::new(
                center,
                ant_radius,
                Color::for_colony(worker.colony),
                CircleStyle::Outline,
            ));
            if worker.carrying_food {
                circles.push(CirclePresentation::new(
                    center,
                    food_radius,
                    Color::BLACK,
                    CircleStyle::Outline,
                ));
            }
        }
        for guard in view.guards() {
            let center = to_vec2(guard.position);
            circles.push(CirclePresentation::new(
                center,
                ant_radius,
                Color::for_colony(guard.colony),
                CircleStyle::Filled,
            ));
            circles.push(CirclePresentation::new(
                center,
                ant_radius,
                Color::BLACK,
                CircleStyle::Outline,
            ));
        }

        Self {
            half_width: tuning.domain_half_width as f32,
            circles,
            mode: view.mode(),
        }
    }
}

fn to_vec2(position: Position) -> Vec2 {
    Vec2::new(position.x() as f32, position.y() as f32)
}

/// Maps the square world domain onto a square pixel surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    half_width: f32,
    size: f32,
}

impl Viewport {
    /// Creates a viewport for a domain of `half_width` drawn on `size` pixels.
    ///
    /// Returns an error when either extent is not a positive finite number.
    pub fn new(half_width: f32, size: f32) -> Result<Self, RenderingError> {
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err(RenderingError::InvalidDomain { half_width });
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(RenderingError::InvalidSurface { size });
        }
        Ok(Self { half_width, size })
    }

    /// Side length of the surface in pixels.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.size / (2.0 * self.half_width)
    }

    /// Converts a world position to surface coordinates with y pointing down.
    #[must_use]
    pub fn to_surface(&self, world: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(
            (world.x + self.half_width) * scale,
            (self.half_width - world.y) * scale,
        )
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title shown by the backend.
    pub title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Bug's Life scenes.
pub trait RenderingBackend {
    /// Presents a single frame.
    fn present(&mut self, presentation: &Presentation) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// The domain half width must be positive and finite.
    InvalidDomain {
        /// Provided half width that failed validation.
        half_width: f32,
    },
    /// The surface size must be positive and finite.
    InvalidSurface {
        /// Provided size that failed validation.
        size: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { half_width } => {
                write!(f, "domain half width must be positive (received {half_width})")
            }
            Self::InvalidSurface { size } => {
                write!(f, "surface size must be positive (received {size})")
            }
        }
    }
}

impl Error for RenderingError {}
