use std::collections::HashMap;

use gridkit_core::Sheet;

use crate::builtin::{
    FreezePaneFixture, HiddenColumnsFixture, HideSecondRowFixture, SampleInventoryFixture,
    TallHeaderRowFixture,
};
use crate::fixture::{FixtureBox, FixtureError};

/// Factory producing a fresh fixture instance per application
pub type FixtureFactory = fn() -> FixtureBox;

/// Registry dispatching fixtures by stable string identifier.
///
/// Identifiers are owned by the registry rather than derived from type names,
/// so harness scripts keep working across refactors. Lookup is exact and case
/// sensitive.
pub struct FixtureRegistry {
    factories: HashMap<&'static str, FixtureFactory>,
}

impl FixtureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry preloaded with the builtin fixture set
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("hide_second_row", || Box::new(HideSecondRowFixture));
        registry.register("hidden_columns", || Box::new(HiddenColumnsFixture));
        registry.register("freeze_pane", || Box::new(FreezePaneFixture));
        registry.register("tall_header_row", || Box::new(TallHeaderRowFixture));
        registry.register("sample_inventory", || Box::new(SampleInventoryFixture));
        registry
    }

    /// Register a fixture factory. A later registration under the same
    /// identifier replaces the earlier one.
    pub fn register(&mut self, id: &'static str, factory: FixtureFactory) {
        self.factories.insert(id, factory);
    }

    /// Instantiate the fixture registered under the given identifier
    pub fn create(&self, id: &str) -> Result<FixtureBox, FixtureError> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| FixtureError::UnknownFixture(id.to_string()))
    }

    /// Look up a fixture by identifier and apply it to the sheet
    pub fn load_fixture(&self, id: &str, sheet: &mut Sheet) -> Result<(), FixtureError> {
        let fixture = self.create(id)?;
        tracing::debug!("Applying fixture {} to sheet {}", id, sheet.name);
        fixture.load_fixture(sheet)
    }

    /// All registered identifiers, in ascending order
    pub fn fixture_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.factories.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for FixtureRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
