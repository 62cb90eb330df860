//! Query-string codec of the dish listing.
//!
//! The same representation is sent to `GET /dish` and written into the
//! address bar, so a listing URL can be shared and reopened:
//!
//! ```text
//! vegetarian=true&page=3&categories=Soup&categories=Salad&sorting=PriceAsc
//! ```
//!
//! `vegetarian` is present only when true, `categories` repeats once per
//! selected category and `sorting` is absent when no explicit sort is chosen.

use super::aggregate::DishSorting;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_VEGETARIAN: &str = "vegetarian";
pub const PARAM_CATEGORIES: &str = "categories";
pub const PARAM_SORTING: &str = "sorting";

/// Filter, sort and page selection of one listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishListQuery {
    pub vegetarian: bool,
    pub page: u32,
    pub categories: Vec<String>,
    pub sorting: Option<DishSorting>,
}

impl Default for DishListQuery {
    fn default() -> Self {
        Self {
            vegetarian: false,
            page: 1,
            categories: Vec::new(),
            sorting: None,
        }
    }
}

impl DishListQuery {
    /// Ordered key/value pairs, before percent-encoding
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3 + self.categories.len());
        if self.vegetarian {
            pairs.push((PARAM_VEGETARIAN, "true".to_string()));
        }
        pairs.push((PARAM_PAGE, self.page.to_string()));
        for category in &self.categories {
            pairs.push((PARAM_CATEGORIES, category.clone()));
        }
        if let Some(sorting) = self.sorting {
            pairs.push((PARAM_SORTING, sorting.code().to_string()));
        }
        pairs
    }

    /// Percent-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a query string (with or without the leading `?`).
    ///
    /// Never fails: an absent or non-positive page falls back to 1, an
    /// absent `vegetarian` to false, and an unknown sort key to no sorting.
    pub fn from_query_string(search: &str) -> Self {
        Self::from_pairs(&parse_pairs(search))
    }

    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let page = first_value(pairs, PARAM_PAGE)
            .and_then(leading_integer)
            .filter(|page| *page >= 1)
            .and_then(|page| u32::try_from(page).ok())
            .unwrap_or(1);

        let vegetarian = first_value(pairs, PARAM_VEGETARIAN) == Some("true");

        let mut categories: Vec<String> = Vec::new();
        for (key, value) in pairs {
            if key == PARAM_CATEGORIES && !categories.contains(value) {
                categories.push(value.clone());
            }
        }

        let sorting = first_value(pairs, PARAM_SORTING).and_then(DishSorting::from_code);

        Self {
            vegetarian,
            page,
            categories,
            sorting,
        }
    }
}

/// Split and percent-decode a query string into key/value pairs, keeping
/// repeated keys in order. Pairs that are not valid UTF-8 after decoding are
/// dropped.
pub fn parse_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

/// First value of `key`, as `URLSearchParams.get` returns it
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|value| value.into_owned())
}

/// Integer prefix of `value` ("3", "3abc" and " 3" all give 3), `None` when
/// there are no leading digits.
fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_only_active_filters() {
        let query = DishListQuery::default();
        assert_eq!(query.to_query_string(), "page=1");

        let query = DishListQuery {
            vegetarian: true,
            page: 3,
            categories: vec!["Soup".to_string(), "Salad".to_string()],
            sorting: Some(DishSorting::PriceAsc),
        };
        assert_eq!(
            query.to_query_string(),
            "vegetarian=true&page=3&categories=Soup&categories=Salad&sorting=PriceAsc"
        );
    }

    #[test]
    fn test_parses_full_listing_url() {
        let query = DishListQuery::from_query_string(
            "?page=3&vegetarian=true&categories=Soup&categories=Salad&sorting=PriceAsc",
        );
        assert_eq!(query.page, 3);
        assert!(query.vegetarian);
        assert_eq!(query.categories, vec!["Soup", "Salad"]);
        assert_eq!(query.sorting, Some(DishSorting::PriceAsc));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let query = DishListQuery::from_query_string("page=abc&vegetarian=yes&sorting=Bogus");
        assert_eq!(query, DishListQuery::default());

        assert_eq!(DishListQuery::from_query_string("page=0").page, 1);
        assert_eq!(DishListQuery::from_query_string("page=-4").page, 1);
        assert_eq!(DishListQuery::from_query_string("page=7abc").page, 7);
        assert_eq!(DishListQuery::from_query_string("").page, 1);
    }

    #[test]
    fn test_duplicate_categories_are_collapsed() {
        let query = DishListQuery::from_query_string("categories=Wok&categories=Wok&categories=Pizza");
        assert_eq!(query.categories, vec!["Wok", "Pizza"]);
    }

    #[test]
    fn test_percent_encoding_round_trip() {
        let query = DishListQuery {
            categories: vec!["Hot & Spicy".to_string(), "Ice cream".to_string()],
            ..DishListQuery::default()
        };
        let encoded = query.to_query_string();
        assert_eq!(
            encoded,
            "page=1&categories=Hot%20%26%20Spicy&categories=Ice%20cream"
        );
        assert_eq!(DishListQuery::from_query_string(&encoded), query);
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let pairs = parse_pairs("categories=Ice+cream&flag");
        assert_eq!(
            pairs,
            vec![
                ("categories".to_string(), "Ice cream".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
        assert_eq!(first_value(&pairs, "flag"), Some(""));
        assert_eq!(first_value(&pairs, "page"), None);
    }
}
