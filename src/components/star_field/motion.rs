//! Per-frame particle motion: pointer repulsion, drift, sway and wraparound.
//!
//! Every function here is pure given its inputs (the pointer is passed in
//! explicitly and randomness comes from the caller's generator), so a frame
//! can be replayed exactly from a seeded [`Rng`].

use fastrand::Rng;

use super::config::{FieldConfig, Repulsion};
use super::particles::{Field, GeometricShape, Star};

/// Last known pointer coordinates in surface space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

/// Single-writer, last-value-wins pointer cell.
///
/// Written by input events, read once per frame. `None` means the pointer
/// is not over the page and no repulsion applies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	last: Option<Pointer>,
}

impl PointerState {
	pub fn set(&mut self, x: f64, y: f64) {
		self.last = (x.is_finite() && y.is_finite()).then_some(Pointer { x, y });
	}

	pub fn clear(&mut self) {
		self.last = None;
	}

	pub fn get(&self) -> Option<Pointer> {
		self.last
	}
}

/// Brightness multiplier for a twinkle phase; always within `[0.4, 1.0]`.
pub fn twinkle_factor(phase: f64) -> f64 {
	if phase.is_finite() {
		phase.sin() * 0.3 + 0.7
	} else {
		0.7
	}
}

/// Displacement pushing a particle at `(x, y)` away from the pointer.
///
/// Linear falloff from `strength` at the pointer to zero at `radius`. A
/// particle exactly on the pointer has no defined direction and is left alone.
pub fn repulsion(x: f64, y: f64, pointer: Option<Pointer>, params: &Repulsion) -> (f64, f64) {
	let Some(p) = pointer else {
		return (0.0, 0.0);
	};
	let (dx, dy) = (x - p.x, y - p.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if !(dist > 0.0 && dist < params.radius) {
		return (0.0, 0.0);
	}
	let force = (params.radius - dist) / params.radius * params.strength;
	(dx / dist * force, dy / dist * force)
}

/// Advance one star by a single frame.
pub fn advance_star(
	star: &mut Star,
	pointer: Option<Pointer>,
	(width, height): (f64, f64),
	now_ms: f64,
	config: &FieldConfig,
	rng: &mut Rng,
) {
	let (px, py) = repulsion(star.x, star.y, pointer, &config.star_repulsion);
	star.x += px;
	star.y += py;

	star.y -= star.speed;
	star.x += sway(now_ms, config.star_sway_rate, star.twinkle_phase, config.star_sway);

	if star.y < 0.0 {
		star.y = height;
		star.x = rng.f64() * width;
	} else if star.y > height {
		star.y = height;
	}
	if star.x < 0.0 {
		star.x = width;
	} else if star.x > width {
		star.x = 0.0;
	}

	if !(star.x.is_finite() && star.y.is_finite()) {
		star.x = rng.f64() * width;
		star.y = rng.f64() * height;
	}

	star.twinkle_phase += star.twinkle_speed;
}

/// Advance one glow shape by a single frame. Shapes wrap with a margin of
/// their own size so they leave the screen fully before reappearing.
pub fn advance_shape(
	shape: &mut GeometricShape,
	pointer: Option<Pointer>,
	(width, height): (f64, f64),
	now_ms: f64,
	config: &FieldConfig,
	rng: &mut Rng,
) {
	let (px, py) = repulsion(shape.x, shape.y, pointer, &config.shape_repulsion);
	shape.x += px;
	shape.y += py;

	shape.y -= config.shape_drift;
	shape.x += sway(now_ms, config.shape_sway_rate, shape.rotation, config.shape_sway);
	shape.rotation += shape.rotation_speed;

	let margin = shape.size;
	if shape.y < -margin {
		shape.y = height + margin;
		shape.x = rng.f64() * width;
	} else if shape.y > height + margin {
		shape.y = height + margin;
	}
	if shape.x < -margin {
		shape.x = width + margin;
	} else if shape.x > width + margin {
		shape.x = -margin;
	}

	if !(shape.x.is_finite() && shape.y.is_finite() && shape.rotation.is_finite()) {
		shape.x = rng.f64() * width;
		shape.y = rng.f64() * height;
		shape.rotation = 0.0;
	}
}

/// Advance every particle in the field by one frame.
pub fn advance_field(
	field: &mut Field,
	pointer: Option<Pointer>,
	now_ms: f64,
	config: &FieldConfig,
	rng: &mut Rng,
) {
	let bounds = (field.width, field.height);
	for shape in &mut field.shapes {
		advance_shape(shape, pointer, bounds, now_ms, config, rng);
	}
	for star in &mut field.stars {
		advance_star(star, pointer, bounds, now_ms, config, rng);
	}
}

fn sway(now_ms: f64, rate: f64, phase: f64, amplitude: f64) -> f64 {
	let t = now_ms * rate + phase;
	if t.is_finite() { t.sin() * amplitude } else { 0.0 }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::star_field::particles::ShapeKind;

	fn star_at(x: f64, y: f64) -> Star {
		Star {
			x,
			y,
			size: 1.0,
			opacity: 1.0,
			speed: 0.0,
			twinkle_phase: 0.0,
			twinkle_speed: 0.02,
		}
	}

	/// Config with sway disabled so displacement comes from repulsion and drift only.
	fn still_config() -> FieldConfig {
		FieldConfig {
			star_sway: 0.0,
			shape_sway: 0.0,
			shape_drift: 0.0,
			..FieldConfig::extended()
		}
	}

	#[test]
	fn star_off_the_top_respawns_at_bottom() {
		let mut rng = Rng::with_seed(11);
		let mut star = star_at(400.0, 0.3);
		star.speed = 0.8;
		advance_star(&mut star, None, (800.0, 600.0), 0.0, &still_config(), &mut rng);
		assert_eq!(star.y, 600.0);
		assert!((0.0..800.0).contains(&star.x));
	}

	#[test]
	fn horizontal_wrap_is_edge_to_edge() {
		let cfg = FieldConfig {
			star_sway: 1.0,
			star_sway_rate: 0.0,
			..still_config()
		};
		let mut rng = Rng::with_seed(1);

		// sin(PI / 2) = 1 pushes right past the edge.
		let mut star = star_at(799.5, 300.0);
		star.twinkle_phase = std::f64::consts::FRAC_PI_2;
		advance_star(&mut star, None, (800.0, 600.0), 0.0, &cfg, &mut rng);
		assert_eq!(star.x, 0.0);

		let mut star = star_at(0.5, 300.0);
		star.twinkle_phase = -std::f64::consts::FRAC_PI_2;
		advance_star(&mut star, None, (800.0, 600.0), 0.0, &cfg, &mut rng);
		assert_eq!(star.x, 800.0);
	}

	#[test]
	fn repulsion_is_zero_at_radius_and_beyond() {
		let params = FieldConfig::extended().star_repulsion;
		let pointer = Some(Pointer { x: 0.0, y: 0.0 });
		assert_eq!(repulsion(150.0, 0.0, pointer, &params), (0.0, 0.0));
		assert_eq!(repulsion(300.0, 0.0, pointer, &params), (0.0, 0.0));
	}

	#[test]
	fn repulsion_decays_linearly_away_from_pointer() {
		let params = FieldConfig::extended().star_repulsion;
		let pointer = Some(Pointer { x: 100.0, y: 100.0 });
		let (dx, dy) = repulsion(175.0, 100.0, pointer, &params);
		assert!((dx - 0.25).abs() < 1e-12);
		assert_eq!(dy, 0.0);

		let (dx, dy) = repulsion(100.0, 70.0, pointer, &params);
		assert_eq!(dx, 0.0);
		assert!((dy + 0.4).abs() < 1e-12);
	}

	#[test]
	fn coincident_pointer_does_not_produce_nan() {
		let mut rng = Rng::with_seed(5);
		let mut star = star_at(200.0, 200.0);
		advance_star(
			&mut star,
			Some(Pointer { x: 200.0, y: 200.0 }),
			(800.0, 600.0),
			0.0,
			&still_config(),
			&mut rng,
		);
		assert_eq!((star.x, star.y), (200.0, 200.0));
	}

	#[test]
	fn no_pointer_means_no_repulsion() {
		let params = FieldConfig::extended().star_repulsion;
		assert_eq!(repulsion(1.0, 1.0, None, &params), (0.0, 0.0));
	}

	#[test]
	fn pointer_state_rejects_non_finite() {
		let mut state = PointerState::default();
		state.set(10.0, 20.0);
		assert_eq!(state.get(), Some(Pointer { x: 10.0, y: 20.0 }));
		state.set(f64::NAN, 20.0);
		assert_eq!(state.get(), None);
		state.set(1.0, 2.0);
		state.clear();
		assert_eq!(state.get(), None);
	}

	#[test]
	fn twinkle_factor_stays_in_range() {
		let mut phase = -1000.0;
		while phase < 1000.0 {
			let f = twinkle_factor(phase);
			assert!((0.4..=1.0).contains(&f), "phase {phase} gave {f}");
			phase += 0.037;
		}
		assert_eq!(twinkle_factor(f64::INFINITY), 0.7);
	}

	#[test]
	fn twinkle_phase_advances_by_speed() {
		let mut rng = Rng::with_seed(2);
		let mut star = star_at(100.0, 100.0);
		advance_star(&mut star, None, (800.0, 600.0), 0.0, &still_config(), &mut rng);
		assert!((star.twinkle_phase - 0.02).abs() < 1e-12);
	}

	#[test]
	fn shapes_rotate_and_wrap_with_margin() {
		let mut rng = Rng::with_seed(9);
		let mut shape = GeometricShape {
			x: 400.0,
			y: -99.5,
			size: 100.0,
			rotation: 0.0,
			rotation_speed: -0.004,
			opacity: 0.2,
			kind: ShapeKind::Hexagon,
			glow_intensity: 0.5,
		};
		let cfg = FieldConfig {
			shape_drift: 1.0,
			..still_config()
		};
		advance_shape(&mut shape, None, (800.0, 600.0), 0.0, &cfg, &mut rng);
		assert_eq!(shape.y, 700.0);
		assert!((0.0..800.0).contains(&shape.x));
		assert!((shape.rotation + 0.004).abs() < 1e-12);

		shape.x = -100.5;
		shape.y = 300.0;
		advance_shape(&mut shape, None, (800.0, 600.0), 0.0, &cfg, &mut rng);
		assert_eq!(shape.x, 900.0);

		shape.x = 900.5;
		shape.y = 300.0;
		advance_shape(&mut shape, None, (800.0, 600.0), 0.0, &cfg, &mut rng);
		assert_eq!(shape.x, -100.0);
	}

	#[test]
	fn star_pushed_below_bottom_is_clamped() {
		let mut rng = Rng::with_seed(6);
		let mut star = star_at(400.0, 599.9);
		// Pointer 10 px above pushes the star 0.5 * 140/150 px downward.
		advance_star(
			&mut star,
			Some(Pointer { x: 400.0, y: 589.9 }),
			(800.0, 600.0),
			0.0,
			&still_config(),
			&mut rng,
		);
		assert_eq!(star.y, 600.0);
		assert_eq!(star.x, 400.0);
	}

	#[test]
	fn long_run_keeps_every_particle_in_bounds() {
		let cfg = FieldConfig::extended();
		let mut rng = Rng::with_seed(1234);
		let mut field = Field::generate(&cfg, 640.0, 480.0, &mut rng);
		let pointer = Some(Pointer { x: 320.0, y: 240.0 });

		for frame in 0..2000 {
			let now = frame as f64 * 16.0;
			advance_field(&mut field, pointer, now, &cfg, &mut rng);
			for s in &field.stars {
				assert!(s.x >= 0.0 && s.x <= 640.0, "star x {}", s.x);
				assert!(s.y >= 0.0 && s.y <= 480.0, "star y {}", s.y);
			}
			for s in &field.shapes {
				assert!(s.x >= -s.size && s.x <= 640.0 + s.size);
				assert!(s.y >= -s.size && s.y <= 480.0 + s.size);
			}
		}
	}
}
