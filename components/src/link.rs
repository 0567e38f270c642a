use crate::imports::*;

/// Link to a page outside of the site, made with \<a\> tag. Always opens in
/// a new tab and never passes the opener or referrer along.
#[component]
pub fn ExternalLink(
	/// The URL the link points to
	#[prop(into)]
	href: MaybeSignal<String>,
	/// The Children of the Link, usually an image or simply the link text
	children: Children,
	/// Additional class names to apply to the link, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || format!("external-link {}", class.get());

	view! {
		<a
			href={move || href.get()}
			class={class}
			target="_blank"
			rel="noopener noreferrer"
		>
			{children()}
		</a>
	}
}
