use crate::imports::*;

/// An image badge, like the ones generated by shields.io
#[component]
pub fn BadgeImage(
	/// The URL of the badge image
	#[prop(into)]
	src: String,
	/// Alternative text, shown when the image can't be loaded
	#[prop(into)]
	alt: String,
) -> impl IntoView {
	if src.is_empty() {
		log::warn!("Badge `{alt}` has no image source");
	}

	view! { <img class="badge-image" src={src} alt={alt}/> }
}
