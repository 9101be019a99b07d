//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fixed, click-through canvas covering the viewport.
//! On mount it starts a [`FrameLoop`], which owns the `requestAnimationFrame`
//! callback and the window listeners for resize and pointer movement. On
//! cleanup the loop is stopped, cancelling the pending frame and removing
//! every listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use super::animator::Animator;
use super::config::FieldConfig;
use super::render;
use super::theme::ThemePair;

type Listener = (&'static str, Closure<dyn FnMut(Event)>);

/// Browser side of the animation: frame scheduling and input listeners.
struct FrameLoop {
	animator: Rc<RefCell<Animator>>,
	tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	pending: Rc<Cell<Option<i32>>>,
	listeners: Vec<Listener>,
}

impl FrameLoop {
	/// Size the canvas to the viewport, generate the field and schedule the
	/// first frame. Returns `None` without touching anything else when there
	/// is no window or 2D context.
	fn start(canvas: &HtmlCanvasElement, config: FieldConfig, dark: bool) -> Option<Self> {
		let window = web_sys::window()?;
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut animator = Animator::new(config, fastrand::Rng::with_seed(js_sys::Date::now() as u64));
		let token = animator.start(w, h, dark)?;

		let animator = Rc::new(RefCell::new(animator));
		let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));

		let themes = ThemePair::new();
		let (animator_tick, tick_inner, pending_tick) = (animator.clone(), tick.clone(), pending.clone());
		*tick.borrow_mut() = Some(Closure::new(move |now: f64| {
			pending_tick.set(None);
			{
				let mut a = animator_tick.borrow_mut();
				if !a.frame(token, now) {
					return;
				}
				render::render(&ctx, a.field(), themes.select(a.is_dark()));
			}
			if let Some(ref cb) = *tick_inner.borrow() {
				pending_tick.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *tick.borrow() {
			pending.set(request_frame(cb));
		}

		let mut listeners: Vec<Listener> = Vec::with_capacity(3);

		let (animator_resize, canvas_resize) = (animator.clone(), canvas.clone());
		listeners.push((
			"resize",
			Closure::new(move |_: Event| {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = viewport_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				animator_resize.borrow_mut().resize(nw, nh);
			}),
		));

		let animator_move = animator.clone();
		listeners.push((
			"mousemove",
			Closure::new(move |ev: Event| {
				if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
					animator_move
						.borrow_mut()
						.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
				}
			}),
		));

		let animator_out = animator.clone();
		listeners.push((
			"mouseout",
			Closure::new(move |ev: Event| {
				// Only when leaving the window, not when crossing between elements.
				let left_window = ev
					.dyn_ref::<MouseEvent>()
					.is_some_and(|ev| ev.related_target().is_none());
				if left_window {
					animator_out.borrow_mut().clear_pointer();
				}
			}),
		));

		for (event, cb) in &listeners {
			let _ = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}

		Some(Self {
			animator,
			tick,
			pending,
			listeners,
		})
	}

	fn set_dark(&self, dark: bool) {
		self.animator.borrow_mut().set_dark(dark);
	}

	/// Stop the animator, cancel the queued frame and drop all listeners.
	fn stop(&mut self) {
		self.animator.borrow_mut().stop();
		let window = web_sys::window();
		if let (Some(id), Some(win)) = (self.pending.take(), window.as_ref()) {
			let _ = win.cancel_animation_frame(id);
		}
		self.tick.borrow_mut().take();
		for (event, cb) in self.listeners.drain(..) {
			if let Some(ref win) = window {
				let _ = win.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
			}
		}
	}
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

/// Renders the ambient starfield behind the page.
///
/// `dark` only changes colors and glow; toggling it never regenerates the
/// field. Pass `config` to pick a profile or override individual tunables;
/// the extended profile is used otherwise.
#[component]
pub fn StarField(
	#[prop(into)] dark: Signal<bool>,
	#[prop(optional)] config: Option<FieldConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		frame_loop.update_value(|slot| {
			if let Some(mut old) = slot.take() {
				old.stop();
			}
			*slot = FrameLoop::start(&canvas, config.clone(), dark.get_untracked());
			if slot.is_none() {
				debug!("star-field: no 2d drawing surface, animation skipped");
			}
		});
	});

	Effect::new(move |_| {
		let dark = dark.get();
		frame_loop.with_value(|slot| {
			if let Some(l) = slot {
				l.set_dark(dark);
			}
		});
	});

	on_cleanup(move || {
		frame_loop.try_update_value(|slot| {
			if let Some(mut l) = slot.take() {
				l.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="star-field-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: 0; pointer-events: none; background: transparent;"
		/>
	}
}
