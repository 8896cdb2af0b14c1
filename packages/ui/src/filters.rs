//! Home-page search filters.
//!
//! [`FilterState`] is the sidebar's whole state. Active-filter chips are a
//! pure function of it ([`FilterState::chips`]), and removing a chip resets
//! exactly the field it came from ([`FilterState::remove`]).

use std::collections::BTreeSet;

use api::models::{Amenity, SearchFilters, SearchRequest, SortOrder, StarRating};

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 2000;
/// Smallest allowed distance between the two price bounds.
pub const PRICE_GAP: u32 = 50;
pub const GUESTS_MIN: u32 = 1;
pub const GUESTS_MAX: u32 = 20;
pub const BEDROOMS_MIN: u32 = 1;
pub const BEDROOMS_MAX: u32 = 10;
pub const CITY_MAX_LEN: usize = 40;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub city: String,
    pub guests: u32,
    pub bedrooms: u32,
    pub stars: BTreeSet<StarRating>,
    pub amenities: BTreeSet<Amenity>,
    pub min_price: u32,
    pub max_price: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            city: String::new(),
            guests: GUESTS_MIN,
            bedrooms: BEDROOMS_MIN,
            stars: BTreeSet::new(),
            amenities: BTreeSet::new(),
            min_price: PRICE_MIN,
            max_price: PRICE_MAX,
        }
    }
}

/// Which field a chip stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKey {
    City,
    Guests,
    Bedrooms,
    Star(StarRating),
    Amenity(Amenity),
    Price,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chip {
    pub key: FilterKey,
    pub label: String,
}

impl FilterState {
    pub fn set_city(&mut self, city: &str) {
        self.city = city.chars().take(CITY_MAX_LEN).collect();
    }

    pub fn increment_guests(&mut self) {
        self.guests = (self.guests + 1).min(GUESTS_MAX);
    }

    pub fn decrement_guests(&mut self) {
        self.guests = self.guests.saturating_sub(1).max(GUESTS_MIN);
    }

    pub fn increment_bedrooms(&mut self) {
        self.bedrooms = (self.bedrooms + 1).min(BEDROOMS_MAX);
    }

    pub fn decrement_bedrooms(&mut self) {
        self.bedrooms = self.bedrooms.saturating_sub(1).max(BEDROOMS_MIN);
    }

    pub fn toggle_star(&mut self, rating: StarRating) {
        if !self.stars.remove(&rating) {
            self.stars.insert(rating);
        }
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
    }

    /// Apply a typed minimum price. Unparsable input counts as the floor, and
    /// the result stays at least [`PRICE_GAP`] below the maximum.
    pub fn set_min_price(&mut self, raw: &str) {
        let wanted = raw.trim().parse::<i64>().unwrap_or(PRICE_MIN as i64);
        let ceiling = self.max_price.saturating_sub(PRICE_GAP) as i64;
        self.min_price = wanted.min(ceiling).max(PRICE_MIN as i64) as u32;
    }

    /// Apply a typed maximum price (on blur). Unparsable input counts as the
    /// ceiling, and the result stays at least [`PRICE_GAP`] above the minimum.
    pub fn set_max_price(&mut self, raw: &str) {
        let wanted = raw.trim().parse::<i64>().unwrap_or(PRICE_MAX as i64);
        let floor = (self.min_price + PRICE_GAP) as i64;
        self.max_price = wanted.max(floor).min(PRICE_MAX as i64) as u32;
    }

    pub fn price_is_default(&self) -> bool {
        self.min_price <= PRICE_MIN && self.max_price >= PRICE_MAX
    }

    /// One chip per non-default field, in sidebar order.
    pub fn chips(&self) -> Vec<Chip> {
        let mut chips = Vec::new();
        if !self.city.is_empty() {
            chips.push(Chip {
                key: FilterKey::City,
                label: format!("City: {}", self.city),
            });
        }
        if self.guests > GUESTS_MIN {
            chips.push(Chip {
                key: FilterKey::Guests,
                label: format!("Guests: {}", self.guests),
            });
        }
        if self.bedrooms > BEDROOMS_MIN {
            chips.push(Chip {
                key: FilterKey::Bedrooms,
                label: format!("Bedrooms: {}", self.bedrooms),
            });
        }
        chips.extend(self.stars.iter().map(|&rating| Chip {
            key: FilterKey::Star(rating),
            label: rating.label(),
        }));
        chips.extend(self.amenities.iter().map(|&amenity| Chip {
            key: FilterKey::Amenity(amenity),
            label: amenity.chip_label(),
        }));
        if !self.price_is_default() {
            chips.push(Chip {
                key: FilterKey::Price,
                label: format!("Price: {}€ - {}€", self.min_price, self.max_price),
            });
        }
        chips
    }

    /// Reset the field behind `key`. Removing an inactive filter is a no-op.
    pub fn remove(&mut self, key: FilterKey) {
        match key {
            FilterKey::City => self.city.clear(),
            FilterKey::Guests => self.guests = GUESTS_MIN,
            FilterKey::Bedrooms => self.bedrooms = BEDROOMS_MIN,
            FilterKey::Star(rating) => {
                self.stars.remove(&rating);
            }
            FilterKey::Amenity(amenity) => {
                self.amenities.remove(&amenity);
            }
            FilterKey::Price => {
                self.min_price = PRICE_MIN;
                self.max_price = PRICE_MAX;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn to_search_filters(&self) -> SearchFilters {
        let mut filters = SearchFilters {
            hotel_amenities: self.amenities.iter().copied().collect(),
            min_price: self.min_price,
            max_price: self.max_price,
            guests: self.guests,
            bedrooms: self.bedrooms,
            city: self.city.clone(),
            ..SearchFilters::default()
        };
        for rating in StarRating::ALL {
            filters.set_stars(rating, self.stars.contains(&rating));
        }
        filters
    }

    pub fn search_request(&self, page: u32, page_size: u32, sort: SortOrder) -> SearchRequest {
        SearchRequest {
            page,
            page_size,
            filter: sort,
            filters: self.to_search_filters(),
        }
    }
}

/// Zero-based page cursor bounded by the last known page count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn previous(self) -> Pager {
        Pager {
            page: if self.has_previous() { self.page - 1 } else { self.page },
            ..self
        }
    }

    pub fn next(self) -> Pager {
        Pager {
            page: if self.has_next() { self.page + 1 } else { self.page },
            ..self
        }
    }

    /// `Page 2 of 5`, or `Page 1 of 1` when nothing was found.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages.max(1))
    }
}
