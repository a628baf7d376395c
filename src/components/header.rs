use leptos::*;
use leptos_router::A;

/// Site header for visitors who are not signed in.
#[component]
pub fn PublicHeader() -> impl IntoView {
    view! {
        <header id="app-public-header">
            <div class="app-public-header--logo">
                <A href="/">
                    <img src="/images/meetup-logo.svg" alt="public-logo"/>
                </A>
            </div>
            <nav class="app-public-header--navigation">
                <li>
                    <A href="">"Login"</A>
                </li>
                <li>
                    <A href="">"Sign up"</A>
                </li>
            </nav>
        </header>
    }
}
