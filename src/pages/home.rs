use leptos::prelude::*;

use crate::components::pattern_network::{NetworkConfig, Pattern, PatternNetwork, Theme};

const SAMPLE_PATTERNS: &[(&str, &str, f64, f64, &str, Option<&str>)] = &[
	("auth-handler", "Auth Handler", 0.92, 80.0, "auth", Some("rust")),
	("auth-handler-alt", "Auth Handler Alt Impl", 0.55, 10.0, "auth", Some("typescript")),
	("retry-backoff", "Retry With Backoff", 0.88, 140.0, "resilience", Some("rust")),
	("circuit-breaker", "Circuit Breaker", 0.74, 45.0, "resilience", Some("go")),
	("repo-layer", "Repository Layer", 0.81, 120.0, "data", Some("typescript")),
	("unit-of-work", "Unit Of Work", 0.62, 22.0, "data", None),
	("event-bus", "Event Bus", 0.69, 60.0, "messaging", Some("rust")),
	("outbox", "Transactional Outbox", 0.95, 35.0, "messaging", Some("go")),
	("rate-limiter", "Token Bucket Rate Limiter", 0.58, 18.0, "resilience", Some("rust")),
	("config-loader", "Config Loader", 0.83, 200.0, "infra", Some("typescript")),
	("feature-flags", "Feature Flags", 0.47, 8.0, "infra", None),
	("cache-aside", "Cache Aside", 0.77, 90.0, "data", Some("rust")),
];

fn sample_patterns() -> Vec<Pattern> {
	SAMPLE_PATTERNS
		.iter()
		.map(|&(id, name, quality, usage, category, language)| Pattern {
			id: id.into(),
			name: name.into(),
			quality,
			usage,
			category: category.into(),
			language: language.map(Into::into),
		})
		.collect()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let patterns = Signal::derive(sample_patterns);
	let selected = RwSignal::new(None::<Pattern>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="patterns-page">
				<h1>"Pattern Network"</h1>
				<p class="subtitle">"Patterns coloured by quality, sized by usage. Click one to inspect it."</p>
				<PatternNetwork
					patterns=patterns
					height=420.0
					theme=Theme::default()
					config=NetworkConfig::default()
					on_select=move |pattern: Pattern| selected.set(Some(pattern))
				/>
				<section class="selected-pattern">
					{move || match selected.get() {
						Some(pattern) => {
							view! {
								<h2>{pattern.name}</h2>
								<p>{format!("{} pattern used {} times", pattern.category, pattern.usage)}</p>
							}
								.into_any()
						}
						None => view! { <p>"No pattern selected"</p> }.into_any(),
					}}
				</section>
			</div>
		</ErrorBoundary>
	}
}
