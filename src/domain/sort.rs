// src/domain/sort.rs

/// Columns a listing can be ordered by.
///
/// Public names (what callers send in `?sort=`) never reach the query text;
/// only the internal column names returned by [`SortColumn::column`] do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Description,
    Type,
    Make,
    Model,
    Year,
    Length,
    Sleeps,
    Price,
    City,
    State,
    Zip,
    Country,
}

impl SortColumn {
    pub const ALL: [SortColumn; 14] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Description,
        SortColumn::Type,
        SortColumn::Make,
        SortColumn::Model,
        SortColumn::Year,
        SortColumn::Length,
        SortColumn::Sleeps,
        SortColumn::Price,
        SortColumn::City,
        SortColumn::State,
        SortColumn::Zip,
        SortColumn::Country,
    ];

    /// Resolve a public sort name. Matching is exact and case-sensitive.
    pub fn from_public_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.public_name() == name)
    }

    pub fn public_name(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Description => "description",
            SortColumn::Type => "type",
            SortColumn::Make => "make",
            SortColumn::Model => "model",
            SortColumn::Year => "year",
            SortColumn::Length => "length",
            SortColumn::Sleeps => "sleeps",
            SortColumn::Price => "price",
            SortColumn::City => "city",
            SortColumn::State => "state",
            SortColumn::Zip => "zip",
            SortColumn::Country => "country",
        }
    }

    /// Column name in the `rentals` table.
    pub fn column(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Description => "description",
            SortColumn::Type => "type",
            SortColumn::Make => "vehicle_make",
            SortColumn::Model => "vehicle_model",
            SortColumn::Year => "vehicle_year",
            SortColumn::Length => "vehicle_length",
            SortColumn::Sleeps => "sleeps",
            SortColumn::Price => "price_per_day",
            SortColumn::City => "home_city",
            SortColumn::State => "home_state",
            SortColumn::Zip => "home_zip",
            SortColumn::Country => "home_country",
        }
    }
}
