//! Spell role classification.
//!
//! A handful of non-creature spells are labelled with a semantic role the
//! policies know how to use. Classification is by card name against a fixed
//! table; it is only meaningful for the small card pool the agent plays with.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::view::CardView;

/// Semantic role of a castable spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellRole {
    /// Single-target damage.
    Burn,
    /// +X/+X on one of our creatures.
    Pump,
    /// Aura-based removal of an opposing creature.
    Pacifism,
}

impl std::fmt::Display for SpellRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpellRole::Burn => "burn",
            SpellRole::Pump => "pump",
            SpellRole::Pacifism => "pacifism",
        };
        f.write_str(name)
    }
}

const DEFAULT_ROLES: &[(&str, SpellRole)] = &[
    ("Lightning Bolt", SpellRole::Burn),
    ("Lightning Strike", SpellRole::Burn),
    ("Giant Growth", SpellRole::Pump),
    ("Titanic Growth", SpellRole::Pump),
    ("Pacifism", SpellRole::Pacifism),
];

/// Name -> role lookup table.
///
/// ## Example
///
/// ```
/// use rust_ccg_agent::cards::{CardView, RoleTable, SpellRole};
///
/// let table = RoleTable::default().with_entry("Shock", SpellRole::Burn);
///
/// assert_eq!(table.classify(&CardView::spell("Shock")), Some(SpellRole::Burn));
/// assert_eq!(table.classify(&CardView::spell("Divination")), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTable {
    roles: FxHashMap<String, SpellRole>,
}

impl Default for RoleTable {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES
                .iter()
                .map(|(name, role)| ((*name).to_string(), *role))
                .collect(),
        }
    }
}

impl RoleTable {
    /// Create a table with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            roles: FxHashMap::default(),
        }
    }

    /// Add or replace an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, role: SpellRole) -> Self {
        self.roles.insert(name.into(), role);
        self
    }

    /// Role of a card, or `None` for anything unlisted.
    #[must_use]
    pub fn classify(&self, card: &CardView) -> Option<SpellRole> {
        self.roles.get(card.name.as_str()).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Classify a card against the default table.
#[must_use]
pub fn classify(card: &CardView) -> Option<SpellRole> {
    DEFAULT_ROLES
        .iter()
        .find(|(name, _)| *name == card.name)
        .map(|(_, role)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roles() {
        assert_eq!(classify(&CardView::spell("Lightning Bolt")), Some(SpellRole::Burn));
        assert_eq!(classify(&CardView::spell("Lightning Strike")), Some(SpellRole::Burn));
        assert_eq!(classify(&CardView::spell("Giant Growth")), Some(SpellRole::Pump));
        assert_eq!(classify(&CardView::spell("Titanic Growth")), Some(SpellRole::Pump));
        assert_eq!(classify(&CardView::spell("Pacifism")), Some(SpellRole::Pacifism));
    }

    #[test]
    fn test_unlisted_card() {
        assert_eq!(classify(&CardView::spell("Counterspell")), None);
        assert_eq!(classify(&CardView::land("Mountain")), None);
        // Lookup is exact.
        assert_eq!(classify(&CardView::spell("lightning bolt")), None);
    }

    #[test]
    fn test_table_matches_free_function() {
        let table = RoleTable::default();
        assert_eq!(table.len(), DEFAULT_ROLES.len());
        for (name, role) in DEFAULT_ROLES {
            assert_eq!(table.classify(&CardView::spell(*name)), Some(*role));
        }
    }

    #[test]
    fn test_custom_entries() {
        let table = RoleTable::empty().with_entry("Shock", SpellRole::Burn);
        assert_eq!(table.classify(&CardView::spell("Shock")), Some(SpellRole::Burn));
        assert_eq!(table.classify(&CardView::spell("Lightning Bolt")), None);

        let replaced = RoleTable::default().with_entry("Pacifism", SpellRole::Burn);
        assert_eq!(replaced.classify(&CardView::spell("Pacifism")), Some(SpellRole::Burn));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(SpellRole::Burn.to_string(), "burn");
        assert_eq!(SpellRole::Pump.to_string(), "pump");
        assert_eq!(SpellRole::Pacifism.to_string(), "pacifism");
    }
}
