use leptos::*;

use crate::view_model::EventItem;

const MAX_AVATARS: usize = 3;
const PLACEHOLDER_THUMBNAIL: &str = "/images/event-placeholder.svg";

/// A single event card.
#[component]
pub fn EventCard(item: EventItem) -> impl IntoView {
    let EventItem {
        id,
        thumbnail,
        alt,
        date,
        title,
        group_name,
        attendees,
    } = item;

    let attendee_count = attendees.len();
    let avatars = attendees
        .into_iter()
        .filter_map(|a| a.avatar.map(|src| (a.name, src)))
        .take(MAX_AVATARS)
        .map(|(name, src)| view! { <img class="event--avatar" src=src alt=name/> })
        .collect_view();

    view! {
        <article class="event" data-event-id=id>
            <img
                class="event--thumbnail"
                src=thumbnail.unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string())
                alt=alt
            />
            <div class="event--body">
                <time class="event--date">{date}</time>
                <h3 class="event--title">{title}</h3>
                <p class="event--group">{group_name}</p>
                <div class="event--attendees">
                    {avatars}
                    <span>{attendee_count} " attendees"</span>
                </div>
            </div>
        </article>
    }
}

/// A titled section of event cards, keyed by event id.
#[component]
pub fn PublicEventList(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] events: Signal<Vec<EventItem>>,
) -> impl IntoView {
    view! {
        <section class="public-event-list">
            <h2>{title}</h2>
            <ul>
                <For
                    each=move || events.get()
                    key=|item| item.id.clone()
                    children=|item| view! { <li><EventCard item/></li> }
                />
            </ul>
        </section>
    }
}
