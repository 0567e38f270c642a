use crate::imports::*;

/// Centres the content of a page horizontally and limits its width.
#[component]
pub fn Container(
	/// Additional class names to apply to the outer div, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
) -> impl IntoView {
	let class = move || format!("container {}", class.get());

	view! { <div class={class}>{children()}</div> }
}
