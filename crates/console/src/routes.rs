//! Application routes the inventory source screens navigate between.
//!
//! Paths match the controller web UI so printed routes can be pasted after the
//! base URL's `#` fragment.

use std::fmt;

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Sources list of an inventory.
    InventorySources { inventory_id: u64 },
    /// Detail view of a single inventory source.
    InventorySourceDetails { inventory_id: u64, source_id: u64 },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::InventorySources { inventory_id } => {
                format!("/inventories/inventory/{}/sources", inventory_id)
            }
            Self::InventorySourceDetails {
                inventory_id,
                source_id,
            } => format!(
                "/inventories/inventory/{}/sources/{}/details",
                inventory_id, source_id
            ),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_path() {
        let route = Route::InventorySources { inventory_id: 42 };
        assert_eq!(route.path(), "/inventories/inventory/42/sources");
    }

    #[test]
    fn test_details_path() {
        let route = Route::InventorySourceDetails {
            inventory_id: 2,
            source_id: 57,
        };
        assert_eq!(route.path(), "/inventories/inventory/2/sources/57/details");
        assert_eq!(route.to_string(), route.path());
    }
}
