//! Flattened, render-ready descriptors derived from the domain records.
//!
//! Everything here is pure so the home view can be tested without a DOM.

use chrono::{DateTime, Datelike, Utc};

use crate::model::{Attendee, Category, Event};

const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Props of a single event card.
#[derive(Debug, Clone, PartialEq)]
pub struct EventItem {
    pub id: String,
    pub thumbnail: Option<String>,
    pub alt: String,
    pub date: String,
    pub title: String,
    pub group_name: String,
    pub attendees: Vec<Attendee>,
}

impl From<&Event> for EventItem {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            thumbnail: event.photos.last().cloned(),
            alt: event.title.clone(),
            date: format_event_date(event.date),
            title: event.title.clone(),
            group_name: event.group_host.name.clone(),
            attendees: event.attendees.clone(),
        }
    }
}

/// Props of a single category tile.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItem {
    pub id: String,
    pub thumbnail: String,
    pub alt: String,
    pub title: String,
}

impl From<&Category> for CategoryItem {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            thumbnail: category.photo.clone(),
            alt: category.name.clone(),
            title: category.name.clone(),
        }
    }
}

/// Maps events in source order. Returns `None` for an empty slice so callers
/// leave whatever they rendered before in place.
pub fn map_event_list(events: &[Event]) -> Option<Vec<EventItem>> {
    if events.is_empty() {
        return None;
    }
    Some(events.iter().map(EventItem::from).collect())
}

/// Maps categories in source order, with the same empty-input behaviour as
/// [`map_event_list`].
pub fn map_category_list(categories: &[Category]) -> Option<Vec<CategoryItem>> {
    if categories.is_empty() {
        return None;
    }
    Some(categories.iter().map(CategoryItem::from).collect())
}

/// Formats a date as `WED, MAR 03`.
pub fn format_event_date(date: DateTime<Utc>) -> String {
    let day = DAYS_OF_WEEK[date.weekday().num_days_from_sunday() as usize];
    let month_day = date.format("%b %d").to_string().to_uppercase();
    format!("{day}, {month_day}")
}

/// The categories that get their own section on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Tech,
    Film,
}

impl Genre {
    pub fn name(self) -> &'static str {
        match self {
            Genre::Tech => "Tech",
            Genre::Film => "Film",
        }
    }
}

/// Finds a category by exact name.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}

/// Events of the category backing `genre`, if that category was fetched.
pub fn genre_events(categories: &[Category], genre: Genre) -> Option<&[Event]> {
    find_category(categories, genre.name()).map(|c| c.events.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{category, event};
    use chrono::TimeZone;

    #[test]
    fn event_mapping_keeps_length_and_order() {
        let events = vec![
            event("a", &["1.jpg"]),
            event("b", &["2.jpg"]),
            event("c", &["3.jpg"]),
        ];

        let items = map_event_list(&events).unwrap();

        assert_eq!(items.len(), events.len());
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn event_mapping_copies_fields() {
        let source = event("a", &["first.jpg", "last.jpg"]);

        let item = EventItem::from(&source);

        assert_eq!(item.thumbnail.as_deref(), Some("last.jpg"));
        assert_eq!(item.alt, source.title);
        assert_eq!(item.title, source.title);
        assert_eq!(item.group_name, "Group a");
        assert_eq!(item.attendees, source.attendees);
        assert_eq!(item.date, "WED, MAR 03");
    }

    #[test]
    fn single_photo_is_thumbnail() {
        let item = EventItem::from(&event("a", &["only.jpg"]));
        assert_eq!(item.thumbnail.as_deref(), Some("only.jpg"));
    }

    #[test]
    fn no_photos_means_no_thumbnail() {
        let item = EventItem::from(&event("a", &[]));
        assert_eq!(item.thumbnail, None);
    }

    #[test]
    fn empty_inputs_map_to_none() {
        assert_eq!(map_event_list(&[]), None);
        assert_eq!(map_category_list(&[]), None);
    }

    #[test]
    fn formats_wednesday_march_third() {
        let date = Utc.with_ymd_and_hms(2021, 3, 3, 9, 0, 0).unwrap();
        assert_eq!(format_event_date(date), "WED, MAR 03");
    }

    #[test]
    fn weekday_table_starts_on_sunday() {
        // 2021-02-28 is a Sunday, 2021-03-06 a Saturday.
        let sunday = Utc.with_ymd_and_hms(2021, 2, 28, 12, 0, 0).unwrap();
        let saturday = Utc.with_ymd_and_hms(2021, 3, 6, 12, 0, 0).unwrap();

        assert_eq!(format_event_date(sunday), "SUN, FEB 28");
        assert_eq!(format_event_date(saturday), "SAT, MAR 06");
    }

    #[test]
    fn day_is_zero_padded() {
        let date = Utc.with_ymd_and_hms(2022, 12, 9, 0, 0, 0).unwrap();
        assert_eq!(format_event_date(date), "FRI, DEC 09");
    }

    #[test]
    fn category_mapping_uses_name_for_alt_and_title() {
        let categories = vec![category("c1", "Tech", vec![]), category("c2", "Film", vec![])];

        let items = map_category_list(&categories).unwrap();

        assert_eq!(
            items[0],
            CategoryItem {
                id: "c1".to_string(),
                thumbnail: "/img/c1.jpg".to_string(),
                alt: "Tech".to_string(),
                title: "Tech".to_string(),
            }
        );
        assert_eq!(items[1].title, "Film");
    }

    #[test]
    fn genre_lookup_is_exact() {
        let categories = vec![
            category("c1", "Technology", vec![event("x", &[])]),
            category("c2", "Tech", vec![event("e1", &[]), event("e2", &[])]),
        ];

        let events = genre_events(&categories, Genre::Tech).unwrap();
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[test]
    fn missing_genre_is_none() {
        let categories = vec![category("c1", "Music", vec![])];
        assert!(genre_events(&categories, Genre::Film).is_none());
        assert!(find_category(&[], "Tech").is_none());
    }
}
