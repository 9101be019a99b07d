//! Particle model and field generation.

use std::f64::consts::TAU;

use fastrand::Rng;

use super::config::{FieldConfig, MAX_SHAPES};

/// A star-like point particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	/// Disc radius, 0.5..2.5.
	pub size: f64,
	/// Base alpha, 0.2..1.0.
	pub opacity: f64,
	/// Upward drift per frame, 0.1..0.6.
	pub speed: f64,
	pub twinkle_phase: f64,
	/// Phase advance per frame, 0.01..0.03.
	pub twinkle_speed: f64,
}

/// Outline drawn for a [`GeometricShape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
	Circle,
	Hexagon,
	Triangle,
}

impl ShapeKind {
	pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Hexagon, ShapeKind::Triangle];
}

/// A large, slowly rotating glow outline drawn behind the stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricShape {
	pub x: f64,
	pub y: f64,
	/// Bounding diameter, 50..150.
	pub size: f64,
	pub rotation: f64,
	/// Radians per frame, within ±0.005.
	pub rotation_speed: f64,
	/// Base alpha, 0.1..0.4.
	pub opacity: f64,
	pub kind: ShapeKind,
	/// 0.3..0.8, scales the blur radius.
	pub glow_intensity: f64,
}

/// The live particle population for one surface size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
	pub stars: Vec<Star>,
	pub shapes: Vec<GeometricShape>,
	pub width: f64,
	pub height: f64,
}

impl Field {
	/// Build a fresh population for a `width` x `height` surface.
	pub fn generate(config: &FieldConfig, width: f64, height: f64, rng: &mut Rng) -> Self {
		let (width, height) = (surface_extent(width), surface_extent(height));
		let stars = generate_stars(width, height, config.density, rng);
		let shapes = if width * height > 0.0 {
			generate_shapes(width, height, config.shape_count.min(MAX_SHAPES), rng)
		} else {
			Vec::new()
		};
		Self {
			stars,
			shapes,
			width,
			height,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty() && self.shapes.is_empty()
	}
}

/// Clamp a reported surface dimension to a usable, finite, non-negative value.
pub fn surface_extent(v: f64) -> f64 {
	if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Upper bound on the star population of a single field.
pub const MAX_STARS: usize = 5000;

/// Number of stars for a surface: one per `density` px², rounded down and
/// capped at [`MAX_STARS`].
pub fn star_count(width: f64, height: f64, density: f64) -> usize {
	if !(density.is_finite() && density > 0.0) {
		return 0;
	}
	let area = surface_extent(width) * surface_extent(height);
	((area / density).floor() as usize).min(MAX_STARS)
}

/// Uniform sample in `[lo, hi)`.
pub(super) fn uniform(rng: &mut Rng, lo: f64, hi: f64) -> f64 {
	lo + rng.f64() * (hi - lo)
}

pub fn generate_stars(width: f64, height: f64, density: f64, rng: &mut Rng) -> Vec<Star> {
	let count = star_count(width, height, density);
	(0..count)
		.map(|_| Star {
			x: rng.f64() * width,
			y: rng.f64() * height,
			size: uniform(rng, 0.5, 2.5),
			opacity: uniform(rng, 0.2, 1.0),
			speed: uniform(rng, 0.1, 0.6),
			twinkle_speed: uniform(rng, 0.01, 0.03),
			twinkle_phase: rng.f64() * TAU,
		})
		.collect()
}

pub fn generate_shapes(width: f64, height: f64, count: usize, rng: &mut Rng) -> Vec<GeometricShape> {
	(0..count)
		.map(|_| GeometricShape {
			x: rng.f64() * width,
			y: rng.f64() * height,
			size: uniform(rng, 50.0, 150.0),
			rotation: rng.f64() * TAU,
			rotation_speed: uniform(rng, -0.005, 0.005),
			opacity: uniform(rng, 0.1, 0.4),
			kind: ShapeKind::ALL[rng.usize(..ShapeKind::ALL.len())],
			glow_intensity: uniform(rng, 0.3, 0.8),
		})
		.collect()
}
