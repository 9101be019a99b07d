//! Fixed navigation header.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::preferences::DarkMode;

/// Nav entries as `(section id, label)`; the hero section has no entry.
pub const NAV_ITEMS: &[(&str, &str)] = &[
	("about", "About"),
	("skills", "Skills"),
	("projects", "Projects"),
	("experience", "Experience"),
	("resume", "Resume"),
	("contact", "Contact"),
];

pub fn header_class(dark: bool, scrolled: bool) -> &'static str {
	match (dark, scrolled) {
		(true, true) => "site-header site-header--compact site-header--dark",
		(true, false) => "site-header site-header--dark",
		(false, true) => "site-header site-header--compact site-header--light",
		(false, false) => "site-header site-header--light",
	}
}

pub fn nav_item_class(active: bool, dark: bool) -> &'static str {
	match (active, dark) {
		(true, _) => "nav-item nav-item--active",
		(false, true) => "nav-item nav-item--dark",
		(false, false) => "nav-item nav-item--light",
	}
}

fn scroll_to_section(id: &str) {
	let target = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.and_then(|el| el.dyn_into::<HtmlElement>().ok());
	if let Some(el) = target {
		let opts = ScrollIntoViewOptions::new();
		opts.set_behavior(ScrollBehavior::Smooth);
		el.scroll_into_view_with_scroll_into_view_options(&opts);
	}
}

/// Navigation bar with active-section highlighting, a compact scrolled
/// appearance, a collapsible mobile menu and the theme toggle.
#[component]
pub fn Header(
	dark_mode: DarkMode,
	#[prop(into)] active_section: Signal<String>,
	#[prop(into)] scrolled: Signal<bool>,
) -> impl IntoView {
	let (menu_open, set_menu_open) = signal(false);

	let nav_buttons = move || {
		NAV_ITEMS
			.iter()
			.map(|&(id, label)| {
				let class = move || nav_item_class(active_section.get() == id, dark_mode.get());
				view! {
					<button
						class=class
						on:click=move |_| {
							scroll_to_section(id);
							set_menu_open.set(false);
						}
					>
						{label}
					</button>
				}
			})
			.collect_view()
	};

	view! {
		<header class=move || header_class(dark_mode.get(), scrolled.get())>
			<div class="site-header__inner">
				<a class="site-header__logo" href="#home">"John Doe"</a>
				<nav class="site-header__nav">{nav_buttons}</nav>
				<div class="site-header__actions">
					<button
						class="theme-toggle"
						aria-label="Toggle theme"
						on:click=move |_| dark_mode.toggle()
					>
						{move || if dark_mode.get() { "☀" } else { "☾" }}
					</button>
					<button
						class="menu-toggle"
						aria-label="Toggle menu"
						on:click=move |_| set_menu_open.update(|open| *open = !*open)
					>
						{move || if menu_open.get() { "✕" } else { "☰" }}
					</button>
				</div>
			</div>
			<Show when=move || menu_open.get()>
				<nav class="site-header__mobile-nav">{nav_buttons}</nav>
			</Show>
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_appearance_tracks_theme_and_scroll() {
		assert!(header_class(true, true).contains("--compact"));
		assert!(!header_class(false, false).contains("--compact"));
		assert!(header_class(false, true).ends_with("--light"));
	}

	#[test]
	fn active_item_ignores_theme() {
		assert_eq!(nav_item_class(true, true), nav_item_class(true, false));
		assert_ne!(nav_item_class(false, true), nav_item_class(false, false));
	}

	#[test]
	fn nav_covers_every_section_but_hero() {
		let ids: Vec<_> = NAV_ITEMS.iter().map(|(id, _)| *id).collect();
		assert_eq!(
			ids,
			["about", "skills", "projects", "experience", "resume", "contact"]
		);
	}
}
