use crate::shared::facet_filter::board::FacetBoard;
use crate::shared::facet_filter::config::FilterConfig;
use contracts::domain::a001_post::aggregate::Post;
use leptos::prelude::*;

#[component]
pub fn App(posts: Vec<Post>) -> impl IntoView {
    // Class names shared by the board and the static-page widgets.
    provide_context(FilterConfig::default());

    view! {
        <FacetBoard posts=posts />
    }
}
