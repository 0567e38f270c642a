use frontend::{
	app::{format_title, SiteTitle},
	prelude::*,
};
use leptos_meta::{provide_meta_context, use_head};

/// Renders a page on its own, returning the body and the tags it put in the
/// document head.
fn render_page<F, V>(page: F) -> (String, String)
where
	F: FnOnce() -> V,
	V: IntoView,
{
	let runtime = create_runtime();
	provide_meta_context();
	let body = page().into_view().render_to_string().to_string();
	let head = use_head().dehydrate();
	runtime.dispose();

	(body, head)
}

#[test]
fn renders_the_headings() {
	let (body, _) = render_page(|| view! { <Technologies/> });

	assert!(body.contains("<main"));
	assert!(body.contains("<h1"));
	assert!(body.contains("Технологии"));
	assert!(body.contains("<h2"));
	assert!(body.contains("Технологии, которые применены в этом проекте:"));
}

#[test]
fn renders_one_linked_badge_per_technology() {
	let (body, _) = render_page(|| view! { <Technologies/> });

	assert_eq!(body.matches("<li").count(), TECHNOLOGIES.len());
	assert_eq!(body.matches("<img").count(), TECHNOLOGIES.len());
	assert_eq!(body.matches(r#"target="_blank""#).count(), TECHNOLOGIES.len());
	assert_eq!(
		body.matches(r#"rel="noopener noreferrer""#).count(),
		TECHNOLOGIES.len()
	);
	assert_eq!(TECHNOLOGIES.len(), 10);
}

#[test]
fn badges_keep_their_order() {
	let (body, _) = render_page(|| view! { <Technologies/> });

	let positions = TECHNOLOGIES
		.iter()
		.map(|technology| {
			body.find(&format!(r#"alt="{}""#, technology.name))
				.unwrap_or_else(|| panic!("badge for {} is missing", technology.name))
		})
		.collect::<Vec<_>>();

	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn links_point_to_the_technology_websites() {
	let (body, _) = render_page(|| view! { <Technologies/> });

	for technology in TECHNOLOGIES {
		assert!(
			body.contains(&format!(r#"href="{}""#, technology.homepage)),
			"missing link to {}",
			technology.homepage
		);
	}
}

#[test]
fn sets_the_page_metadata() {
	let (_, head) = render_page(|| view! { <Technologies/> });

	assert!(head.contains(TECHNOLOGIES_PAGE_TITLE));
	assert!(head.contains(TECHNOLOGIES_PAGE_DESCRIPTION));
	assert!(head.contains("og:title"));
}

#[test]
fn not_found_page_links_back() {
	let (body, _) = render_page(|| view! { <NotFound/> });

	assert!(body.contains("404"));
	assert!(body.contains(r#"href="/technologies""#));
}

#[test]
fn site_name_is_the_title_without_a_page() {
	let (_, head) = render_page(|| view! { <SiteTitle/> });

	assert!(head.contains(&format!("<title>{}</title>", constants::SITE_NAME)));
	assert!(head.contains("<title>Фудграм</title>"));
}

#[test]
fn page_title_is_used_unchanged() {
	let (_, head) = render_page(|| {
		view! {
			<SiteTitle/>
			<Technologies/>
		}
	});

	assert!(head.contains(&format!("<title>{TECHNOLOGIES_PAGE_TITLE}</title>")));
	assert!(!head.contains(&format!("<title>{}</title>", constants::SITE_NAME)));
}

#[test]
fn title_formatter_only_fills_in_empty_titles() {
	assert_eq!(format_title(String::new()), constants::SITE_NAME);
	assert_eq!(format_title("Рецепты".to_string()), "Рецепты");
}
