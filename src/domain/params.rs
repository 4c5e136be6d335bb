// src/domain/params.rs

use std::collections::HashMap;
use std::num::ParseIntError;

use thiserror::Error;

use crate::domain::sort::SortColumn;
use crate::geo::{compute_bounding_box, NearBox, Point, NEAR_RADIUS_MILES};

/// A rejected query parameter. Raised before any query is built.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value for {param} parameter")]
    InvalidNumber {
        param: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Value for {param} parameter must not be negative")]
    Negative { param: &'static str },

    #[error("Empty {param} parameter")]
    Empty { param: &'static str },

    #[error("Invalid id {0:?} exists in ids parameter")]
    InvalidId(String),

    #[error("Near parameter expects comma separated pair of float numbers")]
    NearArity,

    #[error("Invalid latitude value in near parameter")]
    InvalidLatitude,

    #[error("Invalid longitude value in near parameter")]
    InvalidLongitude,

    #[error("Sort by column {0:?} is not allowed")]
    UnknownSort(String),
}

/// Validated filter, sort and pagination intent for a listing query.
///
/// Every field is optional and `None` means no constraint. A zero price bound,
/// limit or offset is kept here as `Some(0)` but the query builder treats it
/// as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameterSet {
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub ids: Option<Vec<i64>>,
    pub near: Option<NearBox>,
    pub sort: Option<SortColumn>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl QueryParameterSet {
    /// Validate raw query-string values. The first bad parameter aborts.
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let get = |key: &str| raw.get(key).map(String::as_str);

        Ok(Self {
            price_min: get("price_min")
                .map(|v| parse_count("price_min", v))
                .transpose()?,
            price_max: get("price_max")
                .map(|v| parse_count("price_max", v))
                .transpose()?,
            ids: get("ids").map(parse_ids).transpose()?,
            near: get("near")
                .map(parse_near)
                .transpose()?
                .map(|center| compute_bounding_box(center, NEAR_RADIUS_MILES)),
            limit: get("limit").map(|v| parse_count("limit", v)).transpose()?,
            offset: get("offset").map(|v| parse_count("offset", v)).transpose()?,
            sort: get("sort").map(parse_sort).transpose()?,
        })
    }
}

fn parse_count(param: &'static str, value: &str) -> Result<i64, ValidationError> {
    let n: i64 = value
        .parse()
        .map_err(|source| ValidationError::InvalidNumber { param, source })?;
    if n < 0 {
        return Err(ValidationError::Negative { param });
    }
    Ok(n)
}

fn parse_ids(value: &str) -> Result<Vec<i64>, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { param: "ids" });
    }

    value
        .split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidId(token.to_string()))
        })
        .collect()
}

fn parse_near(value: &str) -> Result<Point, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { param: "near" });
    }

    let parts: Vec<&str> = value.split(',').collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(ValidationError::NearArity);
    };

    let lat = parse_coordinate(lat).ok_or(ValidationError::InvalidLatitude)?;
    let lng = parse_coordinate(lng).ok_or(ValidationError::InvalidLongitude)?;

    Ok(Point { lat, lng })
}

fn parse_coordinate(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_sort(value: &str) -> Result<SortColumn, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { param: "sort" });
    }
    SortColumn::from_public_name(value)
        .ok_or_else(|| ValidationError::UnknownSort(value.to_string()))
}
