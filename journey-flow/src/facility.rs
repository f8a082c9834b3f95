use serde::{Deserialize, Serialize};

/// Identifier that marks a hospital typed in by hand instead of picked from the list.
pub const CUSTOM_FACILITY_ID: &str = "other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub id: String,
    pub name: String,
    pub city: String,
}

struct Entry {
    id: &'static str,
    name: &'static str,
    city: &'static str,
}

const FACILITIES: &[Entry] = &[
    Entry {
        id: "uz-leuven",
        name: "UZ Leuven Gasthuisberg",
        city: "Leuven",
    },
    Entry {
        id: "uz-gent",
        name: "UZ Gent",
        city: "Gent",
    },
    Entry {
        id: "saint-luc",
        name: "Cliniques universitaires Saint-Luc",
        city: "Bruxelles",
    },
    Entry {
        id: "chu-liege",
        name: "CHU de Liège",
        city: "Liège",
    },
    Entry {
        id: "az-sint-jan",
        name: "AZ Sint-Jan",
        city: "Brugge",
    },
    Entry {
        id: "zna-middelheim",
        name: "ZNA Middelheim",
        city: "Antwerpen",
    },
];

impl From<&Entry> for FacilityRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            city: entry.city.to_string(),
        }
    }
}

/// The static reference list sent along with every journey response.
pub fn facility_list() -> Vec<FacilityRecord> {
    FACILITIES.iter().map(FacilityRecord::from).collect()
}

/// Catalog entry for `id`. The custom marker and unknown ids yield `None`.
pub fn find_facility(id: &str) -> Option<FacilityRecord> {
    FACILITIES
        .iter()
        .find(|entry| entry.id == id)
        .map(FacilityRecord::from)
}
