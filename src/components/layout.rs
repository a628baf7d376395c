use leptos::*;

#[component]
pub fn LayoutDefault(children: Children) -> impl IntoView {
    view! { <div class="layout-default">{children()}</div> }
}

#[component]
pub fn ContainerDefault(children: Children) -> impl IntoView {
    view! { <main class="container-default">{children()}</main> }
}
