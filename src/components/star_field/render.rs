//! Canvas rendering for the starfield.
//!
//! Each frame is drawn from scratch in two passes:
//! 1. Glow shapes (background layer)
//! 2. Stars and their sparkle crosses on top

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use web_sys::CanvasRenderingContext2d;

use super::motion::twinkle_factor;
use super::particles::{Field, GeometricShape, ShapeKind, Star};
use super::theme::{Color, FieldTheme, ShapeStyle, StarStyle};

/// Renders the complete field to the canvas.
pub fn render(ctx: &CanvasRenderingContext2d, field: &Field, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	for shape in &field.shapes {
		draw_shape(ctx, shape, &theme.shapes);
	}
	for star in &field.stars {
		draw_star(ctx, star, &theme.stars);
	}
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &GeometricShape, style: &ShapeStyle) {
	let color = style.color_at(shape.x, shape.y);
	let radius = shape.size / 2.0;

	ctx.save();
	let _ = ctx.translate(shape.x, shape.y);
	let _ = ctx.rotate(shape.rotation);
	ctx.set_global_alpha(shape.opacity);
	ctx.set_shadow_blur(style.blur_for(shape.glow_intensity));
	ctx.set_shadow_color(&color.to_css());
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(style.line_width);

	ctx.begin_path();
	match shape.kind {
		ShapeKind::Circle => {
			let _ = ctx.arc(0.0, 0.0, radius, 0.0, TAU);
		}
		ShapeKind::Hexagon => trace_polygon(ctx, 6, radius, 0.0),
		// Apex pointing up.
		ShapeKind::Triangle => trace_polygon(ctx, 3, radius, -FRAC_PI_2),
	}
	ctx.stroke();
	ctx.restore();
}

/// Regular polygon centered on the origin.
fn trace_polygon(ctx: &CanvasRenderingContext2d, sides: u32, radius: f64, start: f64) {
	for i in 0..sides {
		let angle = start + i as f64 * TAU / sides as f64;
		let (x, y) = (radius * angle.cos(), radius * angle.sin());
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.close_path();
}

fn draw_star(ctx: &CanvasRenderingContext2d, star: &Star, style: &StarStyle) {
	let alpha = star.opacity * twinkle_factor(star.twinkle_phase);

	ctx.save();
	ctx.set_global_alpha(alpha);

	if let Ok(gradient) = ctx.create_radial_gradient(star.x, star.y, 0.0, star.x, star.y, star.size)
	{
		let _ = gradient.add_color_stop(0.0, &style.core.to_css());
		let _ = gradient.add_color_stop(0.5, &style.halo.to_css());
		let _ = gradient.add_color_stop(1.0, &Color::TRANSPARENT.to_css());
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&style.core.to_css());
	}

	ctx.begin_path();
	let _ = ctx.arc(star.x, star.y, star.size, 0.0, PI * 2.0);
	ctx.fill();

	if star.size > style.sparkle_min_size {
		let arm = star.size * 2.0;
		ctx.set_global_alpha(alpha * 0.5);
		ctx.set_stroke_style_str(&style.sparkle.to_css());
		ctx.set_line_width(0.5);
		ctx.begin_path();
		ctx.move_to(star.x - arm, star.y);
		ctx.line_to(star.x + arm, star.y);
		ctx.move_to(star.x, star.y - arm);
		ctx.line_to(star.x, star.y + arm);
		ctx.stroke();
	}

	ctx.restore();
}
