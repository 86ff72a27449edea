use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::api::fetch_relationships;
use super::config::NetworkConfig;
use super::error::NetworkError;
use super::feed::RelationshipFeed;
use super::render;
use super::state::{NetworkState, quality_label, visible_ids};
use super::theme::{QualityBand, Theme};
use super::types::{Pattern, Relationship};

const DEFAULT_WIDTH: f64 = 800.0;

/// Interactive grid view of up to twenty patterns and their relationships.
///
/// Relationships come from `relationships` when the host supplies them, and
/// are otherwise polled from [`NetworkConfig::relationships_endpoint`]. Until
/// any arrive the network shows placeholder edges between patterns sharing a
/// language or category.
#[component]
pub fn PatternNetwork(
	#[prop(into)] patterns: Signal<Vec<Pattern>>,
	#[prop(default = 400.0)] height: f64,
	#[prop(optional, into)] relationships: Option<Signal<Vec<Relationship>>>,
	#[prop(optional, into)] on_select: Option<Callback<Pattern>>,
	#[prop(optional)] theme: Option<Theme>,
	#[prop(optional)] config: Option<NetworkConfig>,
) -> impl IntoView {
	let (theme, config) = (theme.unwrap_or_default(), config.unwrap_or_default());
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let hovered = RwSignal::new(None::<Pattern>);
	let counts = RwSignal::new((0usize, 0usize));
	let resized = RwSignal::new(0u32);

	let relationships = relationships.unwrap_or_else(|| {
		let fetched = RwSignal::new(Vec::new());
		poll_relationships(patterns, config.clone(), fetched);
		fetched.into()
	});

	let resize = window_event_listener(ev::resize, move |_| {
		resized.update(|n| *n = n.wrapping_add(1));
	});
	on_cleanup(move || resize.remove());

	let state_draw = state.clone();
	Effect::new(move |_| {
		resized.track();
		let (patterns, relationships) = (patterns.get(), relationships.get());
		match draw(canvas_ref.get(), height, &patterns, &relationships, &theme, &config) {
			Ok(next) => {
				counts.set((next.node_count(), next.edge_count()));
				*state_draw.borrow_mut() = Some(next);
			}
			Err(err) => debug!("Skipping pattern network render: {}", err),
		}
	});

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?;
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let hit = state_mm
			.borrow()
			.as_ref()
			.and_then(|s| s.pattern_at(x, y).cloned());
		if hovered.with_untracked(|current| *current != hit) {
			hovered.set(hit);
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let hit = state_click
			.borrow()
			.as_ref()
			.and_then(|s| s.pattern_at(x, y).cloned());
		if let (Some(pattern), Some(on_select)) = (hit, on_select) {
			debug!("Selected pattern {}", pattern.id);
			on_select.run(pattern);
		}
	};

	let on_mouseleave = move |_: MouseEvent| hovered.set(None);

	view! {
		<div class="pattern-network">
			<div class="pattern-network-stage">
				<canvas
					node_ref=canvas_ref
					class="pattern-network-canvas"
					on:mousemove=on_mousemove
					on:click=on_click
					on:mouseleave=on_mouseleave
					style:cursor=move || if hovered.with(Option::is_some) { "pointer" } else { "default" }
				/>
			</div>
			<aside class="pattern-network-summary">
				<div class="badges">
					<span class="badge">{move || format!("{} patterns", counts.get().0)}</span>
					<span class="badge">{move || format!("{} connections", counts.get().1)}</span>
				</div>
				{move || match hovered.get() {
					Some(pattern) => view! { <HoverSummary pattern=pattern /> }.into_any(),
					None => view! { <p class="hint">"Hover over a pattern for details"</p> }.into_any(),
				}}
			</aside>
		</div>
	}
}

#[component]
fn HoverSummary(pattern: Pattern) -> impl IntoView {
	let band = QualityBand::of(pattern.quality);
	view! {
		<div class="hover-summary">
			<h3>{pattern.name}</h3>
			<dl>
				<dt>"Category"</dt>
				<dd>{pattern.category}</dd>
				<dt>"Language"</dt>
				<dd>{pattern.language.unwrap_or_else(|| "n/a".into())}</dd>
				<dt>"Usage"</dt>
				<dd>{pattern.usage}</dd>
				<dt>"Quality"</dt>
				<dd class=band.css_class()>{quality_label(pattern.quality)}</dd>
			</dl>
		</div>
	}
}

/// Lay the network out for the canvas' current size and repaint it.
fn draw(
	canvas: Option<HtmlCanvasElement>,
	height: f64,
	patterns: &[Pattern],
	relationships: &[Relationship],
	theme: &Theme,
	config: &NetworkConfig,
) -> Result<NetworkState, NetworkError> {
	let canvas = canvas.ok_or(NetworkError::SurfaceUnavailable)?;
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(DEFAULT_WIDTH);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);

	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(NetworkError::SurfaceUnavailable)?
		.dyn_into()
		.map_err(|_| NetworkError::SurfaceUnavailable)?;

	let state = NetworkState::new(patterns, relationships, width, height, config);
	render::render(&state, theme, &mut ctx);
	debug!(
		"Rendered {} patterns and {} connections",
		state.node_count(),
		state.edge_count()
	);
	Ok(state)
}

/// Keep `target` in sync with the relationship service: once on mount, again
/// whenever the visible ids change, and every poll interval after that.
/// A change of ids clears `target` at once, and responses for ids that are no
/// longer visible are dropped. Failed requests leave the previous relationships
/// in place.
fn poll_relationships(
	patterns: Signal<Vec<Pattern>>,
	config: NetworkConfig,
	target: RwSignal<Vec<Relationship>>,
) {
	if config.relationships_endpoint.is_none() {
		return;
	}
	let interval = config.poll_interval;
	let feed = Rc::new(RefCell::new(RelationshipFeed::default()));

	let feed_refresh = feed.clone();
	let refresh = move || {
		let ids = patterns.with_untracked(|p| visible_ids(p));
		let Some(url) = config.relationships_url(&ids) else {
			return;
		};
		let feed = feed_refresh.clone();
		spawn_local(async move {
			match fetch_relationships(&url).await {
				Ok(fetched) => {
					let count = fetched.len();
					let changed = feed.borrow_mut().accept(&ids, fetched);
					if changed {
						debug!("Received {} relationships", count);
						let current = feed.borrow().relationships().to_vec();
						target.set(current);
					}
				}
				Err(err) => warn!("Keeping previous relationships: {}", err),
			}
		});
	};

	let refresh_on_change = refresh.clone();
	Effect::new(move |previous: Option<Vec<String>>| {
		let ids = patterns.with(|p| visible_ids(p));
		if previous.as_ref() != Some(&ids) {
			let dropped = feed.borrow_mut().rekey(ids.clone());
			if dropped {
				target.set(Vec::new());
			}
			refresh_on_change();
		}
		ids
	});

	match set_interval_with_handle(refresh, interval) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("Relationship polling disabled: {:?}", err),
	}
}
