//! Read-only event catalogue served by the server functions.

use std::{collections::HashMap, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Category, City, Event, GeoPoint};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate event id {0:?}")]
    DuplicateEvent(String),
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    photo: String,
    #[serde(default)]
    events: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cities: Vec<City>,
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: Vec<City>,
    events: Vec<Event>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut by_id = HashMap::with_capacity(file.events.len());
        for (index, event) in file.events.iter().enumerate() {
            if by_id.insert(event.id.as_str(), index).is_some() {
                return Err(CatalogError::DuplicateEvent(event.id.clone()));
            }
        }

        let categories = file
            .categories
            .into_iter()
            .map(|record| {
                let events = record
                    .events
                    .iter()
                    .filter_map(|id| match by_id.get(id.as_str()) {
                        Some(&index) => Some(file.events[index].clone()),
                        None => {
                            log::warn!("category {:?} references unknown event {id:?}", record.name);
                            None
                        }
                    })
                    .collect();
                Category {
                    id: record.id,
                    name: record.name,
                    photo: record.photo,
                    events,
                }
            })
            .collect();

        Ok(Self {
            cities: file.cities,
            events: file.events,
            categories,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Events within `radius_km` of the given point, nearest first.
    /// Events without a location are never returned.
    pub fn nearest_events(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        limit: usize,
    ) -> Vec<Event> {
        let origin = GeoPoint::new(longitude, latitude);
        let mut found: Vec<(f64, &Event)> = self
            .events
            .iter()
            .filter_map(|event| {
                let location = event.location?;
                let distance = distance_km(&origin, &location);
                (distance <= radius_km).then_some((distance, event))
            })
            .collect();

        found.sort_by(|a, b| a.0.total_cmp(&b.0));
        found
            .into_iter()
            .take(limit)
            .map(|(_, event)| event.clone())
            .collect()
    }
}

/// Great-circle distance using the haversine formula.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (lat1, lat2) = (a.latitude().to_radians(), b.latitude().to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "cities": [
            { "_id": "ams", "name": "Amsterdam", "countryAbbr": "NL", "location": { "coordinates": [4.8952, 52.3702] } }
        ],
        "events": [
            {
                "_id": "far", "title": "Berlin Rust", "date": "2021-03-04T18:00:00Z",
                "photos": ["far.jpg"], "groupHost": { "_id": "g1", "name": "Rust Berlin" },
                "location": { "coordinates": [13.405, 52.52] }
            },
            {
                "_id": "near", "title": "Amsterdam Rust", "date": "2021-03-03T18:00:00Z",
                "photos": ["near.jpg"], "groupHost": { "_id": "g2", "name": "Rust NL" },
                "location": { "coordinates": [4.90, 52.37] }
            },
            {
                "_id": "utrecht", "title": "Utrecht Film", "date": "2021-03-05T20:00:00Z",
                "groupHost": { "_id": "g3", "name": "Film Club" },
                "location": { "coordinates": [5.1214, 52.0907] }
            },
            {
                "_id": "online", "title": "Online Talk", "date": "2021-03-06T20:00:00Z",
                "groupHost": { "_id": "g4", "name": "Remote" }
            }
        ],
        "categories": [
            { "_id": "tech", "name": "Tech", "photo": "tech.jpg", "events": ["near", "far", "missing"] },
            { "_id": "film", "name": "Film", "photo": "film.jpg", "events": ["utrecht"] }
        ]
    }"#;

    #[test]
    fn resolves_category_events_in_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let tech = catalog.category_by_name("Tech").unwrap();
        let ids: Vec<_> = tech.events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["near", "far"]);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.cities()[0].name, "Amsterdam");
    }

    #[test]
    fn category_lookup_is_exact() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(catalog.category_by_name("tech").is_none());
        assert!(catalog.category_by_name("Film").is_some());
    }

    #[test]
    fn nearest_events_sorted_and_bounded() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let events = catalog.nearest_events(52.3702, 4.8952, 100.0, 10);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["near", "utrecht"]);
    }

    #[test]
    fn nearest_events_respects_limit() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let events = catalog.nearest_events(52.3702, 4.8952, 1000.0, 2);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["near", "utrecht"]);
    }

    #[test]
    fn rejects_duplicate_event_ids() {
        let json = r#"{
            "events": [
                { "_id": "a", "title": "A", "date": "2021-03-03T18:00:00Z", "groupHost": { "_id": "g", "name": "G" } },
                { "_id": "a", "title": "B", "date": "2021-03-03T18:00:00Z", "groupHost": { "_id": "g", "name": "G" } }
            ]
        }"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateEvent(id) if id == "a"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn bundled_catalog_has_both_genres() {
        let catalog = Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json")).unwrap();

        assert!(catalog.category_by_name("Tech").is_some());
        assert!(catalog.category_by_name("Film").is_some());
        assert!(!catalog.cities().is_empty());
    }

    #[test]
    fn bundled_catalog_images_are_served_assets() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let catalog = Catalog::load(root.join("data/catalog.json")).unwrap();

        let located = catalog.nearest_events(0.0, 0.0, f64::INFINITY, usize::MAX);
        let events = located.iter().chain(catalog.categories().iter().flat_map(|c| &c.events));
        let images = events
            .flat_map(|e| e.photos.iter().chain(e.attendees.iter().filter_map(|a| a.avatar.as_ref())))
            .chain(catalog.categories().iter().map(|c| &c.photo));

        for image in images {
            let path = root.join("public").join(image.trim_start_matches('/'));
            assert!(path.is_file(), "{image} is not under public/");
        }
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Catalog::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn amsterdam_to_berlin_distance() {
        let amsterdam = GeoPoint::new(4.8952, 52.3702);
        let berlin = GeoPoint::new(13.405, 52.52);

        let distance = distance_km(&amsterdam, &berlin);

        assert!((distance - 577.0).abs() < 5.0, "got {distance}");
        assert_eq!(distance_km(&amsterdam, &amsterdam), 0.0);
    }
}
