use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        tracing::debug!("No page at /{}, redirecting", segments.join("/"));
        navigator().replace(Route::Preview { state: None });
    });

    rsx! {}
}
