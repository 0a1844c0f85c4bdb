//! Turn structure and agent configuration.
//!
//! - `Phase`: The coarse turn phases the engine reports in a snapshot
//! - `AgentConfig`: Tunable constants for the heuristic policies

use serde::{Deserialize, Serialize};

/// Turn phase reported by the engine.
///
/// The engine owns phase sequencing; the agent only reads the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Untap, upkeep and draw.
    #[default]
    Beginning,
    /// First main phase.
    PrecombatMain,
    /// Attackers, blockers and combat damage.
    Combat,
    /// Second main phase.
    PostcombatMain,
    /// End step and cleanup.
    Ending,
}

impl Phase {
    /// Check if this is one of the two main phases.
    #[must_use]
    pub const fn is_main(self) -> bool {
        matches!(self, Phase::PrecombatMain | Phase::PostcombatMain)
    }
}

/// Heuristic agent configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Damage dealt by a burn spell.
    /// Used both to gate casting and to filter burn targets.
    pub burn_damage: i64,

    /// Highest power a creature may have to be thrown in as a chump blocker.
    pub chump_max_power: i64,

    /// Aim burn at the opponent when no creature can be killed and the
    /// damage would be lethal.
    pub burn_face_when_lethal: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            burn_damage: 3,
            chump_max_power: 2,
            burn_face_when_lethal: true,
        }
    }
}

impl AgentConfig {
    /// Create a new config with custom burn damage.
    pub fn with_burn_damage(mut self, damage: i64) -> Self {
        self.burn_damage = damage;
        self
    }

    /// Create a new config with custom chump-block power threshold.
    pub fn with_chump_max_power(mut self, power: i64) -> Self {
        self.chump_max_power = power;
        self
    }

    /// Create a new config that enables or disables lethal face burn.
    pub fn with_burn_face_when_lethal(mut self, enabled: bool) -> Self {
        self.burn_face_when_lethal = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_phases() {
        assert!(Phase::PrecombatMain.is_main());
        assert!(Phase::PostcombatMain.is_main());
        assert!(!Phase::Beginning.is_main());
        assert!(!Phase::Combat.is_main());
        assert!(!Phase::Ending.is_main());
    }

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.burn_damage, 3);
        assert_eq!(config.chump_max_power, 2);
        assert!(config.burn_face_when_lethal);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AgentConfig::default()
            .with_burn_damage(2)
            .with_chump_max_power(1)
            .with_burn_face_when_lethal(false);

        assert_eq!(config.burn_damage, 2);
        assert_eq!(config.chump_max_power, 1);
        assert!(!config.burn_face_when_lethal);
    }

    #[test]
    fn test_serialization() {
        let config = AgentConfig::default().with_burn_damage(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AgentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
