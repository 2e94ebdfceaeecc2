//! Core value types used by mortydex state.

use serde::{Deserialize, Serialize};

/// Named reference to a location (current location or origin) of a character.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Display name of the location (e.g., "Earth (C-137)").
    #[serde(default)]
    pub name: String,
    /// API URL of the location resource; may be empty for "unknown".
    #[serde(default)]
    pub url: String,
}

/// Character record as returned by the remote API.
///
/// Records are immutable once received; the UI only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier assigned by the API.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Status as reported by the API (`Alive`, `Dead`, `unknown`).
    #[serde(default)]
    pub status: String,
    /// Species (e.g., `Human`).
    #[serde(default)]
    pub species: String,
    /// Subspecies or variant; usually empty.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Gender as reported by the API.
    #[serde(default)]
    pub gender: String,
    /// Place of origin.
    #[serde(default)]
    pub origin: LocationRef,
    /// Last known location.
    #[serde(default)]
    pub location: LocationRef,
    /// Avatar image URL.
    #[serde(default)]
    pub image: String,
    /// Episode URLs the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
}

/// One page of results fetched from the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    /// Records on this page in API order.
    pub results: Vec<Character>,
    /// Whether the API reports a following page.
    pub has_next: bool,
}

/// User-adjustable search constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Free-text name match.
    Name,
    /// Categorical status.
    Status,
    /// Categorical species.
    Species,
    /// Categorical gender.
    Gender,
}

impl FilterField {
    /// All filter fields in declaration order; query strings follow this order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Status, Self::Species, Self::Gender];

    /// Query parameter key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Status => "status",
            Self::Species => "species",
            Self::Gender => "gender",
        }
    }

    /// Whether values for this field come from a fixed enumeration.
    #[must_use]
    pub const fn is_categorical(self) -> bool {
        !matches!(self, Self::Name)
    }

    /// Parse a field from its query key (case-insensitive).
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
    }
}

/// Rejected attempt to set a categorical filter to a value outside its enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {} value", field.key())]
pub struct InvalidFilterValue {
    /// Field the value was meant for.
    pub field: FilterField,
    /// Offending value.
    pub value: String,
}

/// Current value of every filter field. Empty string means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text name.
    name: String,
    /// Status value or empty.
    status: String,
    /// Species value or empty.
    species: String,
    /// Gender value or empty.
    gender: String,
}

impl FilterState {
    /// Current value for `field`.
    #[must_use]
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Status => &self.status,
            FilterField::Species => &self.species,
            FilterField::Gender => &self.gender,
        }
    }

    /// What: Set a field after validating categorical values.
    ///
    /// Inputs:
    /// - `field`: Field to update
    /// - `value`: New value; empty clears the constraint
    ///
    /// Output:
    /// - `Ok(())` on update; `Err(InvalidFilterValue)` leaves the state unchanged.
    ///
    /// # Errors
    /// - Returns `Err` when a categorical field receives a value outside its options.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), InvalidFilterValue> {
        if field.is_categorical()
            && !value.is_empty()
            && !crate::sources::categorical_options(field).contains(&value)
        {
            return Err(InvalidFilterValue {
                field,
                value: value.to_string(),
            });
        }
        let slot = match field {
            FilterField::Name => &mut self.name,
            FilterField::Status => &mut self.status,
            FilterField::Species => &mut self.species,
            FilterField::Gender => &mut self.gender,
        };
        value.clone_into(slot);
        Ok(())
    }

    /// Fields with a non-empty value, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> {
        FilterField::ALL
            .into_iter()
            .map(|f| (f, self.get(f)))
            .filter(|(_, v)| !v.is_empty())
    }
}

/// Logical fetch lane. Each lane holds at most one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchSlot {
    /// Page-1 fetch issued by committing filters.
    Commit,
    /// Next-page fetch appended to the current list.
    LoadMore,
}

/// Fetch request handed to the background fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Commit generation the request belongs to.
    pub generation: u64,
    /// Lane this request occupies.
    pub slot: FetchSlot,
    /// Page number being requested.
    pub page: u32,
    /// Query string appended after `?`.
    pub query: String,
}

/// Completed fetch corresponding to a prior [`PageRequest`].
#[derive(Debug)]
pub struct PageResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed commit generation.
    pub generation: u64,
    /// Echoed lane.
    pub slot: FetchSlot,
    /// Echoed page number.
    pub page: u32,
    /// Fetched page or the failure.
    pub outcome: Result<Page, crate::sources::FetchError>,
}

impl PageResponse {
    /// Pair a request with its outcome.
    #[must_use]
    pub fn for_request(
        req: &PageRequest,
        outcome: Result<Page, crate::sources::FetchError>,
    ) -> Self {
        Self {
            id: req.id,
            generation: req.generation,
            slot: req.slot,
            page: req.page,
            outcome,
        }
    }
}

/// Which pane currently has keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Filter bar (name input and categorical selectors).
    #[default]
    Filters,
    /// Result list.
    Results,
}
