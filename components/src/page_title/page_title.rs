use crate::imports::*;

/// Sets the level of the Page Title
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageTitleVariant {
	/// The main heading of a page, rendered as `<h1>`
	#[default]
	Heading,
	/// A section heading, rendered as `<h2>`
	SubHeading,
}

impl PageTitleVariant {
	/// The class name used to style this variant
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Heading => "page-title-heading",
			Self::SubHeading => "page-title-subheading",
		}
	}
}

/// A heading on a page. The variant decides which heading element is used.
#[component]
pub fn PageTitle(
	/// Additional class names to pass to the heading, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
	/// Heading level of the title
	#[prop(optional)]
	variant: PageTitleVariant,
) -> impl IntoView {
	let class = move || format!("page-title {} {}", variant.as_css_name(), class.get());

	match variant {
		PageTitleVariant::Heading => view! { <h1 class={class}>{children()}</h1> }.into_view(),
		PageTitleVariant::SubHeading => view! { <h2 class={class}>{children()}</h2> }.into_view(),
	}
}
