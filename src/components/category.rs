use leptos::*;
use leptos_router::A;

use crate::view_model::CategoryItem;

/// Link to the category page; the name is percent-encoded into a single path segment.
pub fn category_href(name: &str) -> String {
    format!("/categories/{}", urlencoding::encode(name))
}

#[component]
pub fn CategoryCard(item: CategoryItem) -> impl IntoView {
    let href = category_href(&item.title);
    view! {
        <A href=href class="category">
            <img class="category--thumbnail" src=item.thumbnail alt=item.alt/>
            <span class="category--title" data-category-id=item.id>{item.title}</span>
        </A>
    }
}

/// Category browser. Rendered even when there are no categories yet.
#[component]
pub fn CategoryList(
    #[prop(into)] title: String,
    #[prop(into)] categories: Signal<Vec<CategoryItem>>,
) -> impl IntoView {
    view! {
        <section class="category-list">
            <h2>{title}</h2>
            <div class="category-list--grid">
                <For
                    each=move || categories.get()
                    key=|item| item.id.clone()
                    children=|item| view! { <CategoryCard item/> }
                />
            </div>
        </section>
    }
}
