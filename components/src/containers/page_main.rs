use crate::imports::*;

/// The outermost element of a page. Every page renders exactly one of these
/// and puts the rest of its content inside it.
#[component]
pub fn Main(
	/// Additional class names to apply to the main element, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
) -> impl IntoView {
	let class = move || format!("main {}", class.get());

	view! { <main class={class}>{children()}</main> }
}
