//! Light/dark styling for the starfield.
//!
//! The theme only ever chooses colors and glow strength. Particle motion
//! and population are independent of it.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const TRANSPARENT: Color = Color {
		r: 0,
		g: 0,
		b: 0,
		a: 0.0,
	};

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Star disc gradient and sparkle colors.
#[derive(Clone, Debug, PartialEq)]
pub struct StarStyle {
	/// Gradient center.
	pub core: Color,
	/// Gradient midpoint (offset 0.5); the rim is transparent.
	pub halo: Color,
	/// Stroke color of the sparkle cross on larger stars.
	pub sparkle: Color,
	/// Stars larger than this radius get a sparkle cross.
	pub sparkle_min_size: f64,
}

/// Glow outline style for geometric shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
	pub palette: Vec<Color>,
	/// Shadow blur (px) at full glow intensity.
	pub blur: f64,
	pub line_width: f64,
}

impl ShapeStyle {
	/// Palette color for a shape at `(x, y)`.
	///
	/// Colors band diagonally in 100 px steps, so a shape keeps its hue
	/// until it crosses into the next band.
	pub fn color_at(&self, x: f64, y: f64) -> Color {
		self.palette[palette_index(x, y, self.palette.len())]
	}

	pub fn blur_for(&self, glow_intensity: f64) -> f64 {
		self.blur * glow_intensity.clamp(0.0, 1.0)
	}
}

/// Index into a palette of `len` colors: `floor((x + y) / 100) mod len`.
pub fn palette_index(x: f64, y: f64, len: usize) -> usize {
	if len == 0 {
		return 0;
	}
	let band = ((x + y) / 100.0).floor();
	if !band.is_finite() {
		return 0;
	}
	(band as i64).rem_euclid(len as i64) as usize
}

/// Complete visual theme for one display mode.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldTheme {
	pub stars: StarStyle,
	pub shapes: ShapeStyle,
}

impl FieldTheme {
	/// Bright white/blue stars with saturated, strongly blurred shapes.
	pub fn dark() -> Self {
		Self {
			stars: StarStyle {
				core: Color::rgb(255, 255, 255),
				halo: Color::rgb(224, 242, 254),
				sparkle: Color::rgb(96, 165, 250),
				sparkle_min_size: 1.5,
			},
			shapes: ShapeStyle {
				palette: vec![
					Color::rgb(96, 165, 250),  // Sky blue
					Color::rgb(167, 139, 250), // Violet
					Color::rgb(34, 211, 238),  // Cyan
					Color::rgb(244, 114, 182), // Pink
				],
				blur: 30.0,
				line_width: 1.5,
			},
		}
	}

	/// Slate stars with muted, lightly blurred shapes.
	pub fn light() -> Self {
		Self {
			stars: StarStyle {
				core: Color::rgb(30, 41, 59),
				halo: Color::rgb(100, 116, 139),
				sparkle: Color::rgb(71, 85, 105),
				sparkle_min_size: 1.5,
			},
			shapes: ShapeStyle {
				palette: vec![
					Color::rgb(59, 130, 246), // Blue
					Color::rgb(139, 92, 246), // Purple
					Color::rgb(6, 182, 212),  // Teal
					Color::rgb(236, 72, 153), // Rose
				],
				blur: 12.0,
				line_width: 1.0,
			},
		}
	}

	pub fn for_mode(dark: bool) -> Self {
		if dark { Self::dark() } else { Self::light() }
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::dark()
	}
}

/// Both themes, built once and selected per frame by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemePair {
	dark: FieldTheme,
	light: FieldTheme,
}

impl ThemePair {
	pub fn new() -> Self {
		Self {
			dark: FieldTheme::dark(),
			light: FieldTheme::light(),
		}
	}

	pub fn select(&self, dark: bool) -> &FieldTheme {
		if dark { &self.dark } else { &self.light }
	}
}

impl Default for ThemePair {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_bands_by_position() {
		assert_eq!(palette_index(0.0, 0.0, 4), 0);
		assert_eq!(palette_index(60.0, 39.0, 4), 0);
		assert_eq!(palette_index(60.0, 40.0, 4), 1);
		assert_eq!(palette_index(250.0, 200.0, 4), 0);
		// Off-screen shapes (negative coordinates) still map into the palette.
		assert_eq!(palette_index(-150.0, 0.0, 4), 2);
		assert_eq!(palette_index(f64::NAN, 0.0, 4), 0);
		assert_eq!(palette_index(10.0, 10.0, 0), 0);
	}

	#[test]
	fn same_band_same_color() {
		let style = FieldTheme::dark().shapes;
		assert_eq!(style.color_at(120.0, 30.0), style.color_at(101.0, 0.0));
	}

	#[test]
	fn dark_glows_harder_than_light() {
		let (dark, light) = (FieldTheme::dark(), FieldTheme::light());
		assert!(dark.shapes.blur_for(0.5) > light.shapes.blur_for(0.5));
		assert_eq!(dark.shapes.blur_for(2.0), dark.shapes.blur);
		assert_ne!(dark.stars.core, light.stars.core);
		assert_eq!(FieldTheme::for_mode(true), dark);
		assert_eq!(FieldTheme::for_mode(false), light);
	}

	#[test]
	fn theme_pair_selects_without_rebuilding() {
		let themes = ThemePair::new();
		assert_eq!(themes.select(true), &FieldTheme::dark());
		assert_eq!(themes.select(false), &FieldTheme::light());
		assert!(std::ptr::eq(themes.select(true), themes.select(true)));
		assert!(!std::ptr::eq(themes.select(true), themes.select(false)));
	}

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(30, 41, 59).to_css(), "#1e293b");
		assert_eq!(
			Color::rgb(255, 255, 255).with_alpha(0.5).to_css(),
			"rgba(255, 255, 255, 0.5)"
		);
		assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
	}
}
