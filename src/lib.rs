//! starfield-portfolio: single-page portfolio shell with an ambient starfield.
//!
//! This crate provides a WASM-based page whose background is an animated,
//! pointer-reactive particle field drawn on a canvas, together with a
//! navigation header that follows the scroll position and a persisted
//! light/dark theme.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod preferences;
pub mod scroll;

pub use components::header::Header;
pub use components::star_field::{FieldConfig, FieldTheme, Profile, StarField};

/// Page sections as `(id, heading)` in document order.
pub const SECTIONS: &[(&str, &str)] = &[
	("home", "Hello, I'm John Doe"),
	("about", "About Me"),
	("skills", "Skills"),
	("projects", "Projects"),
	("experience", "Experience"),
	("resume", "Resume"),
	("contact", "Get In Touch"),
];

const SECTION_IDS: &[&str] = &[
	"home",
	"about",
	"skills",
	"projects",
	"experience",
	"resume",
	"contact",
];

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield-portfolio: logging initialized");
}

/// Load starfield overrides from a script element with id="starfield-config".
/// Expected format: JSON object, e.g. `{ "profile": "starfield", "density": 9000 }`.
fn load_field_config() -> FieldConfig {
	let Some(json_text) = read_config_script() else {
		return FieldConfig::default();
	};

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"starfield-portfolio: loaded config (density {}, {} shapes)",
				config.density, config.shape_count
			);
			config
		}
		Err(e) => {
			warn!("starfield-portfolio: failed to parse starfield config: {}", e);
			FieldConfig::default()
		}
	}
}

fn read_config_script() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starfield-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

pub fn page_class(dark: bool) -> &'static str {
	if dark { "page page--dark" } else { "page page--light" }
}

/// Main application component.
/// Restores the theme, tracks scrolling and composes the page over the starfield.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let dark_mode = preferences::use_dark_mode();
	let scroll = scroll::use_scroll_state(SECTION_IDS);
	let config = load_field_config();

	view! {
		<Html
			attr:lang="en"
			attr:dir="ltr"
			attr:data-theme=move || if dark_mode.get() { "dark" } else { "light" }
		/>
		<Title text="John Doe | Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class=move || page_class(dark_mode.get())>
			<StarField dark=dark_mode.signal() config=config />
			<Header dark_mode=dark_mode active_section=scroll.active scrolled=scroll.scrolled />
			<main class="page__content">
				{SECTIONS
					.iter()
					.map(|&(id, heading)| {
						view! {
							<section id=id class="page-section">
								<h2>{heading}</h2>
							</section>
						}
					})
					.collect_view()}
			</main>
		</div>
	}
}
