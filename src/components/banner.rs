use leptos::*;

#[component]
pub fn PublicBanner() -> impl IntoView {
    view! {
        <section class="public-banner">
            <h1>"The real world is calling"</h1>
            <p>
                "Join a local group to meet people, try something new, or do more of what you love."
            </p>
        </section>
    }
}
