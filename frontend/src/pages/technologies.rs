use crate::prelude::*;

/// The title of the technologies page
pub const TECHNOLOGIES_PAGE_TITLE: &str = "О проекте";
/// The description search engines show for the technologies page
pub const TECHNOLOGIES_PAGE_DESCRIPTION: &str = "Фудграм - Технологии";

/// The page listing every technology the project is built with, each as a
/// badge linking to the technology's website
#[component]
pub fn Technologies() -> impl IntoView {
	view! {
		<Title text=TECHNOLOGIES_PAGE_TITLE/>
		<Meta name="description" content=TECHNOLOGIES_PAGE_DESCRIPTION/>
		<Meta property="og:title" content=TECHNOLOGIES_PAGE_TITLE/>

		<Main>
			<Container>
				<PageTitle class="technologies-title">"Технологии"</PageTitle>
				<div class="technologies-content">
					<div>
						<PageTitle
							variant=PageTitleVariant::SubHeading
							class="technologies-subtitle"
						>
							"Технологии, которые применены в этом проекте:"
						</PageTitle>
						<div class="technologies-text">
							<ul class="technologies-list">
								{TECHNOLOGIES
									.into_iter()
									.map(|technology| view! { <TechnologyItem technology=technology/> })
									.collect_view()}
							</ul>
						</div>
					</div>
				</div>
			</Container>
		</Main>
	}
}

/// A single technology in the list. Falls back to the plain name when the
/// badge can't be built.
#[component]
fn TechnologyItem(
	/// The technology to show
	technology: Technology,
) -> impl IntoView {
	let content = match technology.badge_url() {
		Ok(url) => view! { <BadgeImage src=url.to_string() alt=technology.name/> }.into_view(),
		Err(err) => {
			error!("Cannot build badge for `{}`: {}", technology.name, err);
			technology.name.into_view()
		}
	};

	view! {
		<li class="technologies-item">
			<ExternalLink href=technology.homepage>{content}</ExternalLink>
		</li>
	}
}
