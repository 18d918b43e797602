//! Navigation seam between the controller and whatever hosts it.
//!
//! Responsibilities:
//! - Define the [`Navigator`] trait the controller navigates through.
//! - Provide [`History`], the in-process navigator used by the runtime.
//!
//! Does NOT handle:
//! - Rendering the destination screen (the console exits on navigation).

use crate::routes::Route;

/// Something that can move the user to another route.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Records every route navigated to, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    visited: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent route, if any navigation happened.
    pub fn current(&self) -> Option<&Route> {
        self.visited.last()
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        tracing::info!(route = %route, "Navigating");
        self.visited.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_records_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);

        history.navigate(Route::InventorySources { inventory_id: 1 });
        history.navigate(Route::InventorySourceDetails {
            inventory_id: 1,
            source_id: 9,
        });

        assert_eq!(history.visited().len(), 2);
        assert_eq!(
            history.current(),
            Some(&Route::InventorySourceDetails {
                inventory_id: 1,
                source_id: 9
            })
        );
    }
}
