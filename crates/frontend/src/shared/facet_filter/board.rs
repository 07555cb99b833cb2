//! Post board rendered from the JSON the page generator embeds.
//!
//! Produces the same markup as the static page (`.topic-filter .topic-tag`,
//! `.tag-filter .tag`, `.post-card` with `data-*` facets), but visibility is
//! driven by a reactive [`FilterState`] instead of DOM listeners.

use contracts::domain::a001_post::aggregate::{parse_posts, sort_newest_first, Post};
use contracts::enums::facet::Facet;
use contracts::shared::facet_filter::{FacetCatalog, FilterState, Selection};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::config::{FilterConfig, BOUND_ATTRIBUTE};
use super::dom_host::mark_bound;
use super::error::MountError;
use crate::app::App;

/// `<script type="application/json">` holding the posts
pub const POSTS_DATA_ID: &str = "posts-data";
/// Mount point of the board. Without it the static markup is enhanced
/// instead, so the page never shows both lists.
pub const BOARD_MOUNT_ID: &str = "facet-board";

/// Decode the embedded posts and mount the board once.
pub fn mount_board(document: &Document, data: &Element) -> Result<(), MountError> {
    if data.has_attribute(BOUND_ATTRIBUTE) {
        return Ok(());
    }

    let parent: HtmlElement = document
        .get_element_by_id(BOARD_MOUNT_ID)
        .ok_or_else(|| MountError::NoMountPoint(BOARD_MOUNT_ID.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(BOARD_MOUNT_ID.to_string()))?;

    let posts = board_posts(&data.text_content().unwrap_or_default())?;

    log::info!("rendering post board: {} posts", posts.len());
    mark_bound(data);
    leptos::mount::mount_to(parent, move || view! { <App posts=posts /> }).forget();
    Ok(())
}

/// Posts to render, newest first. Undecodable entries are logged and left out.
pub fn board_posts(raw: &str) -> Result<Vec<Post>, MountError> {
    let batch = parse_posts(raw).map_err(MountError::PostsData)?;
    for rejected in &batch.rejected {
        log::warn!("post #{} skipped: {}", rejected.index, rejected.error);
    }

    let mut posts = batch.posts;
    sort_newest_first(&mut posts);
    Ok(posts)
}

/// Markup classes of a selector group and its buttons
fn group_classes(facet: Facet) -> (&'static str, &'static str) {
    match facet {
        Facet::Topic => ("topic-filter", "topic-tag"),
        Facet::Tag => ("tag-filter", "tag"),
    }
}

#[component]
pub fn FacetBoard(posts: Vec<Post>) -> impl IntoView {
    let config = use_context::<FilterConfig>().unwrap_or_default();
    let catalog = FacetCatalog::from_posts(&posts);
    let filter = RwSignal::new(FilterState::new());

    let total = posts.len();
    let cards: Vec<_> = posts.iter().map(Post::facets).collect();
    let visible_count = Memo::new(move |_| {
        filter.with(|state| cards.iter().filter(|card| state.matches(card)).count())
    });
    let active_count = Memo::new(move |_| filter.with(FilterState::active_count));

    let hidden_class = config.hidden_class;
    let active_class = config.active_class;

    view! {
        <div class="facet-board">
            <SelectorGroup
                facet=Facet::Topic
                values=catalog.values(Facet::Topic).to_vec()
                filter=filter
                active_class=active_class.clone()
            />
            <SelectorGroup
                facet=Facet::Tag
                values=catalog.values(Facet::Tag).to_vec()
                filter=filter
                active_class=active_class.clone()
            />
            <div class="facet-board__summary">
                <span>{move || format!("{} / {}", visible_count.get(), total)}</span>
                {move || {
                    let count = active_count.get();
                    (count > 0).then(|| view! {
                        <span class="badge badge--primary">{count}</span>
                    })
                }}
            </div>
            <div class="post-list">
                {posts
                    .into_iter()
                    .map(|post| view! {
                        <PostCard post=post filter=filter hidden_class=hidden_class.clone() />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// `all` selector followed by one selector per catalog value
#[component]
fn SelectorGroup(
    facet: Facet,
    values: Vec<String>,
    filter: RwSignal<FilterState>,
    active_class: String,
) -> impl IntoView {
    let (group_class, item_class) = group_classes(facet);
    let options: Vec<Selection> = std::iter::once(Selection::All)
        .chain(values.into_iter().map(Selection::Value))
        .collect();

    view! {
        <div class=group_class>
            <span class="facet-label">{facet.display_name()}</span>
            {options
                .into_iter()
                .map(|selection| {
                    let value = selection.as_str().to_string();
                    let label = if selection.is_all() { "All".to_string() } else { value.clone() };
                    let active_class = active_class.clone();
                    let current = selection.clone();
                    let class = move || {
                        if filter.with(|state| *state.active(facet) == current) {
                            format!("{} {}", item_class, active_class)
                        } else {
                            item_class.to_string()
                        }
                    };
                    // no notification when the value is already active
                    let on_click = move |_| {
                        let selection = selection.clone();
                        filter.maybe_update(|state| state.select(facet, selection));
                    };
                    match facet {
                        Facet::Topic => view! {
                            <button type="button" class=class data-topic=value on:click=on_click>
                                {label}
                            </button>
                        }
                        .into_any(),
                        Facet::Tag => view! {
                            <button type="button" class=class data-tag=value on:click=on_click>
                                {label}
                            </button>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PostCard(post: Post, filter: RwSignal<FilterState>, hidden_class: String) -> impl IntoView {
    let facets = post.facets();
    let topic = facets.topic.clone();
    let topic_attr = topic.clone();
    let tag_list = facets.tag_list();
    let display_time = post.display_time();
    let Post {
        author,
        digest,
        content,
        tags,
        ..
    } = post;

    let hidden = Memo::new(move |_| filter.with(|state| !state.matches(&facets)));
    let class = move || {
        if hidden.get() {
            format!("post-card {}", hidden_class)
        } else {
            "post-card".to_string()
        }
    };

    view! {
        <article class=class data-topic=topic_attr data-tags=tag_list>
            <header class="post-card__meta">
                <span class="post-card__topic">{topic}</span>
                {author.map(|author| view! { <span class="post-card__author">{author}</span> })}
                {display_time.map(|time| view! { <time class="post-card__time">{time}</time> })}
            </header>
            {digest.map(|digest| view! { <p class="post-card__digest">{digest}</p> })}
            <div class="post-card__content" inner_html=content.unwrap_or_default()></div>
            <div class="post-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag-chip">{tag}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}
