//! Animal listing query parameters
//!
//! `AnimalQuery` is the raw query string as clients send it (every value a
//! string, possibly empty). `AnimalFilter` is the typed form the service
//! executes. Empty values count as absent; an unknown sort key or direction
//! disables sorting instead of failing.

use sea_orm::Order;
use serde::Deserialize;

use crate::errors::ServiceError;
use models::animal;

/// Raw `/animals` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimalQuery {
    pub species_name: Option<String>,
    pub zoo_id: Option<String>,
    #[serde(rename = "minAge")]
    pub min_age: Option<String>,
    #[serde(rename = "maxAge")]
    pub max_age: Option<String>,
    pub gender: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    AnimalId,
    Name,
    Age,
    Gender,
    SpeciesName,
    ZooId,
}

impl SortKey {
    /// Column names from the allow-list, plus their short aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "animal_id" | "id" => Some(Self::AnimalId),
            "name" => Some(Self::Name),
            "age" => Some(Self::Age),
            "gender" => Some(Self::Gender),
            "species_name" | "species" => Some(Self::SpeciesName),
            "zoo_id" | "zoo" => Some(Self::ZooId),
            _ => None,
        }
    }

    pub fn column(self) -> animal::Column {
        match self {
            Self::AnimalId => animal::Column::AnimalId,
            Self::Name => animal::Column::Name,
            Self::Age => animal::Column::Age,
            Self::Gender => animal::Column::Gender,
            Self::SpeciesName => animal::Column::SpeciesName,
            Self::ZooId => animal::Column::ZooId,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl From<SortOrder> for Order {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

/// Typed animal filter; every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalFilter {
    pub species_name: Option<String>,
    pub zoo_id: Option<i32>,
    pub min_age: Option<f64>,
    pub max_age: Option<f64>,
    pub gender: Option<String>,
    pub sort: Option<Sort>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &str, v: Option<String>) -> Result<Option<T>, ServiceError> {
    match non_empty(v) {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ServiceError::Validation(format!("{name} must be a number, got '{s}'"))),
    }
}

/// Integer id that may arrive as `"1"` or `"1.0"`.
fn parse_id(name: &str, v: Option<String>) -> Result<Option<i32>, ServiceError> {
    let Some(n) = parse_number::<f64>(name, v.clone())? else { return Ok(None) };
    if n.fract() != 0.0 || n < i32::MIN as f64 || n > i32::MAX as f64 {
        return Err(ServiceError::Validation(format!(
            "{name} must be an integer, got '{}'",
            v.unwrap_or_default().trim()
        )));
    }
    Ok(Some(n as i32))
}

impl TryFrom<AnimalQuery> for AnimalFilter {
    type Error = ServiceError;

    fn try_from(q: AnimalQuery) -> Result<Self, Self::Error> {
        let sort = non_empty(q.sort_by).and_then(|by| {
            let key = SortKey::parse(&by)?;
            let order = match non_empty(q.sort_order) {
                None => SortOrder::Asc,
                Some(o) => SortOrder::parse(&o)?,
            };
            Some(Sort { key, order })
        });

        Ok(AnimalFilter {
            species_name: non_empty(q.species_name),
            zoo_id: parse_id("zoo_id", q.zoo_id)?,
            min_age: parse_number("minAge", q.min_age)?,
            max_age: parse_number("maxAge", q.max_age)?,
            gender: non_empty(q.gender),
            sort,
        })
    }
}
