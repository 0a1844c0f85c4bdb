//! Card views, cost estimation, and spell roles.
//!
//! ## Key Types
//!
//! - `CardView`: Read-only card projection from an engine snapshot
//! - `ManaCost` / `ManaSymbol` / `Color`: Declared costs and colors
//! - `SpellRole` / `RoleTable`: Semantic roles for a few known spells
//!
//! ## Cost Estimation
//!
//! `approx_cost`, `infer_pay_symbol` and `ensure_payable` approximate what a
//! card costs and synthesize mana to pay for it.

pub mod cost;
pub mod roles;
pub mod view;

pub use cost::{approx_cost, ensure_payable, infer_pay_symbol};
pub use roles::{classify, RoleTable, SpellRole};
pub use view::{CardView, Color, ManaCost, ManaSymbol};
