use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Category
// ============================================================================

/// Dish categories offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    Wok,
    Pizza,
    Soup,
    Dessert,
    Drink,
}

impl DishCategory {
    /// Code used by the API and in the listing URL
    pub fn code(&self) -> &'static str {
        match self {
            DishCategory::Wok => "Wok",
            DishCategory::Pizza => "Pizza",
            DishCategory::Soup => "Soup",
            DishCategory::Dessert => "Dessert",
            DishCategory::Drink => "Drink",
        }
    }

    pub fn all() -> Vec<DishCategory> {
        vec![
            DishCategory::Wok,
            DishCategory::Pizza,
            DishCategory::Soup,
            DishCategory::Dessert,
            DishCategory::Drink,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Wok" => Some(DishCategory::Wok),
            "Pizza" => Some(DishCategory::Pizza),
            "Soup" => Some(DishCategory::Soup),
            "Dessert" => Some(DishCategory::Dessert),
            "Drink" => Some(DishCategory::Drink),
            _ => None,
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Server-side orderings of the dish listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishSorting {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

impl DishSorting {
    /// Sorting applied by the server when the request carries none
    pub const DEFAULT: DishSorting = DishSorting::NameAsc;

    pub fn code(&self) -> &'static str {
        match self {
            DishSorting::NameAsc => "NameAsc",
            DishSorting::NameDesc => "NameDesc",
            DishSorting::PriceAsc => "PriceAsc",
            DishSorting::PriceDesc => "PriceDesc",
            DishSorting::RatingAsc => "RatingAsc",
            DishSorting::RatingDesc => "RatingDesc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DishSorting::NameAsc => "Name (A-Z)",
            DishSorting::NameDesc => "Name (Z-A)",
            DishSorting::PriceAsc => "Price ascending",
            DishSorting::PriceDesc => "Price descending",
            DishSorting::RatingAsc => "Rating ascending",
            DishSorting::RatingDesc => "Rating descending",
        }
    }

    pub fn all() -> Vec<DishSorting> {
        vec![
            DishSorting::NameAsc,
            DishSorting::NameDesc,
            DishSorting::PriceAsc,
            DishSorting::PriceDesc,
            DishSorting::RatingAsc,
            DishSorting::RatingDesc,
        ]
    }

    /// Parse a sort key. `"None"` is the UI's "no explicit sort" option and
    /// is not a sorting.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NameAsc" => Some(DishSorting::NameAsc),
            "NameDesc" => Some(DishSorting::NameDesc),
            "PriceAsc" => Some(DishSorting::PriceAsc),
            "PriceDesc" => Some(DishSorting::PriceDesc),
            "RatingAsc" => Some(DishSorting::RatingAsc),
            "RatingDesc" => Some(DishSorting::RatingDesc),
            _ => None,
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    pub category: String,
}

/// Pagination block of the listing response. `count` is the number of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub size: i64,
    pub count: i64,
    pub current: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishPagedList {
    pub dishes: Vec<Dish>,
    pub pagination: PageInfo,
}

impl DishPagedList {
    /// Dishes whose category is in `selected`; all of them when nothing is
    /// selected.
    pub fn retain_categories(&self, selected: &[String]) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|dish| selected.is_empty() || selected.iter().any(|c| *c == dish.category))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "dishes": [
            {
                "name": "Tom Yum",
                "description": null,
                "price": 420,
                "image": "https://img/tom-yum.jpg",
                "vegetarian": false,
                "rating": 7.5,
                "category": "Soup",
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            },
            {
                "name": "Margherita",
                "description": "Tomato and basil",
                "price": 550,
                "image": "https://img/margherita.jpg",
                "vegetarian": true,
                "rating": null,
                "category": "Pizza",
                "id": "6e1b6c1a-9f3d-4a8e-8c43-5c1a9b7d2e10"
            }
        ],
        "pagination": { "size": 6, "count": 4, "current": 1 }
    }"#;

    #[test]
    fn test_paged_list_from_api_json() {
        let page: DishPagedList = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.dishes.len(), 2);
        assert_eq!(page.pagination.count, 4);
        assert_eq!(page.dishes[0].rating, Some(7.5));
        assert_eq!(page.dishes[1].rating, None);
        assert_eq!(page.dishes[1].category, DishCategory::Pizza.code());
    }

    #[test]
    fn test_retain_categories() {
        let page: DishPagedList = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.retain_categories(&[]).len(), 2);

        let soups = page.retain_categories(&["Soup".to_string()]);
        assert_eq!(soups.len(), 1);
        assert_eq!(soups[0].name, "Tom Yum");

        assert!(page.retain_categories(&["Wok".to_string()]).is_empty());
    }

    #[test]
    fn test_sorting_codes() {
        for sorting in DishSorting::all() {
            assert_eq!(DishSorting::from_code(sorting.code()), Some(sorting));
        }
        assert_eq!(DishSorting::from_code("None"), None);
        assert_eq!(DishSorting::DEFAULT, DishSorting::NameAsc);
    }
}
