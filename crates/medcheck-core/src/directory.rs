//! Specialist directory lookup.

use crate::catalog::defaults;
use crate::models::Provider;

/// Read-only provider directory, searchable by specialist category.
pub struct ProviderDirectory {
    providers: Vec<Provider>,
}

impl ProviderDirectory {
    /// Build a directory from an authored provider list.
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// The built-in provider directory.
    pub fn builtin() -> Self {
        Self::new(defaults::default_providers())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// All providers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    /// Providers for a specialist category, in declaration order. Unknown
    /// categories legitimately yield an empty list.
    pub fn find_providers(&self, specialty: &str) -> Vec<&Provider> {
        self.providers
            .iter()
            .filter(|p| p.has_specialty(specialty))
            .collect()
    }
}
