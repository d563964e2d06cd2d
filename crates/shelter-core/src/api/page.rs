use serde::{Deserialize, Serialize};

use crate::models::SortDirection;

/// One page of a server-side paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// Paging and ordering parameters shared by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

impl PageQuery {
    #[must_use]
    pub fn new(size: u32, sort_by: &str, sort_direction: SortDirection) -> Self {
        Self {
            page: 0,
            size,
            sort_by: sort_by.to_string(),
            sort_direction,
        }
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
            ("sortBy".to_string(), self.sort_by.clone()),
            (
                "sortDirection".to_string(),
                self.sort_direction.as_str().to_string(),
            ),
        ]
    }
}
