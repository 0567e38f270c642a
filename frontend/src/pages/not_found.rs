use crate::prelude::*;

/// Shown for any path that doesn't match a route
#[component]
pub fn NotFound() -> impl IntoView {
	#[cfg(feature = "ssr")]
	{
		if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
			response.set_status(http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<Title text="Страница не найдена"/>

		<Main>
			<Container>
				<PageTitle>"404"</PageTitle>
				<p class="not-found-text">"Страница не найдена"</p>
				<a href=AppRoute::Technologies.path()>"Технологии"</a>
			</Container>
		</Main>
	}
}
