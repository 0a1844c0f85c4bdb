//! Card views - read-only card projections handed over by the engine.
//!
//! A `CardView` is rebuilt by the engine for every snapshot. The agent never
//! mutates it; resource changes go through `ManaPool` instead.
//!
//! Every field has a documented default so a snapshot that omits a value
//! still decodes:
//!
//! | Field | Default |
//! |---|---|
//! | `cost` | `None` (costs 0) |
//! | `colors` | empty (pays with generic mana) |
//! | `power` / `toughness` | 0 |
//! | flags | `false` |

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One of the five colors of mana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

/// A mana symbol that can appear in a cost or a pool.
///
/// Unit variants only, so a `ManaCost` serializes as a plain string-keyed map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaSymbol {
    White,
    Blue,
    Black,
    Red,
    Green,
    /// Generic mana, payable with anything.
    Generic,
}

impl ManaSymbol {
    /// Engine shorthand character (`W`, `U`, `B`, `R`, `G`, or `1`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ManaSymbol::White => 'W',
            ManaSymbol::Blue => 'U',
            ManaSymbol::Black => 'B',
            ManaSymbol::Red => 'R',
            ManaSymbol::Green => 'G',
            ManaSymbol::Generic => '1',
        }
    }

    /// Parse an engine shorthand character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(ManaSymbol::White),
            'U' => Some(ManaSymbol::Blue),
            'B' => Some(ManaSymbol::Black),
            'R' => Some(ManaSymbol::Red),
            'G' => Some(ManaSymbol::Green),
            '1' => Some(ManaSymbol::Generic),
            _ => None,
        }
    }
}

impl From<Color> for ManaSymbol {
    fn from(color: Color) -> Self {
        match color {
            Color::White => ManaSymbol::White,
            Color::Blue => ManaSymbol::Blue,
            Color::Black => ManaSymbol::Black,
            Color::Red => ManaSymbol::Red,
            Color::Green => ManaSymbol::Green,
        }
    }
}

impl std::fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Declared mana cost: symbol -> count.
///
/// Counts are signed because they come straight from the engine and are not
/// validated there. Negative counts make the cost malformed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManaCost(FxHashMap<ManaSymbol, i64>);

impl ManaCost {
    /// Create an empty cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add symbols to the cost (builder pattern).
    #[must_use]
    pub fn with(mut self, symbol: impl Into<ManaSymbol>, count: i64) -> Self {
        *self.0.entry(symbol.into()).or_insert(0) += count;
        self
    }

    /// Generic-only cost of `count`.
    #[must_use]
    pub fn generic(count: i64) -> Self {
        Self::new().with(ManaSymbol::Generic, count)
    }

    /// Count for a single symbol.
    #[must_use]
    pub fn count(&self, symbol: ManaSymbol) -> i64 {
        self.0.get(&symbol).copied().unwrap_or(0)
    }

    /// Iterate over (symbol, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (ManaSymbol, i64)> + '_ {
        self.0.iter().map(|(s, c)| (*s, *c))
    }

    /// Check if the cost has no symbols at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-only card projection.
///
/// ## Example
///
/// ```
/// use rust_ccg_agent::cards::{CardView, Color, ManaCost};
///
/// let bears = CardView::creature("Grizzly Bears", 2, 2)
///     .with_cost(ManaCost::generic(1).with(Color::Green, 1))
///     .with_colors([Color::Green]);
///
/// assert!(bears.is_creature);
/// assert_eq!(bears.primary_color(), Some(Color::Green));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardView {
    /// Card name.
    pub name: String,

    /// Declared cost, `None` for lands and cost-less cards.
    pub cost: Option<ManaCost>,

    /// Colors in declaration order; the first is the primary color.
    pub colors: Vec<Color>,

    /// Current power.
    pub power: i64,

    /// Current toughness.
    pub toughness: i64,

    pub is_land: bool,
    pub is_creature: bool,
    pub is_token: bool,

    /// Tapped on the battlefield.
    pub tapped: bool,

    /// Declared as an attacker this combat.
    pub attacking: bool,
}

impl CardView {
    /// Create a non-creature, non-land card.
    #[must_use]
    pub fn spell(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a land.
    #[must_use]
    pub fn land(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_land: true,
            ..Self::default()
        }
    }

    /// Create a creature with the given stats.
    #[must_use]
    pub fn creature(name: impl Into<String>, power: i64, toughness: i64) -> Self {
        Self {
            name: name.into(),
            power,
            toughness,
            is_creature: true,
            ..Self::default()
        }
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: ManaCost) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the colors (builder pattern).
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Mark as tapped (builder pattern).
    #[must_use]
    pub fn tapped(mut self) -> Self {
        self.tapped = true;
        self
    }

    /// Mark as attacking (builder pattern).
    #[must_use]
    pub fn attacking(mut self) -> Self {
        self.attacking = true;
        self
    }

    /// Mark as a token (builder pattern).
    #[must_use]
    pub fn token(mut self) -> Self {
        self.is_token = true;
        self
    }

    /// First listed color, if any.
    #[must_use]
    pub fn primary_color(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    /// (power, toughness) pair.
    #[must_use]
    pub fn stats(&self) -> (i64, i64) {
        (self.power, self.toughness)
    }
}
