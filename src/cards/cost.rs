//! Cost estimation and mana synthesis.
//!
//! Costs are approximated by summing every symbol, colored or generic (the
//! "CMC proxy"). Paying is approximated by adding that many copies of a
//! single symbol inferred from the card's primary color. This only models
//! mono-colored decks; multi-color affordability is not tracked.

use tracing::{trace, warn};

use super::view::{CardView, ManaCost, ManaSymbol};
use crate::core::mana::ManaPool;

/// Approximate total cost of a card.
///
/// Returns 0 when the cost is absent or malformed (a negative count, or a
/// total that does not fit a `u32`).
#[must_use]
pub fn approx_cost(card: &CardView) -> u32 {
    card.cost.as_ref().map_or(0, sum_cost)
}

fn sum_cost(cost: &ManaCost) -> u32 {
    let mut total: u32 = 0;
    for (_, count) in cost.iter() {
        let Ok(count) = u32::try_from(count) else {
            return 0;
        };
        match total.checked_add(count) {
            Some(sum) => total = sum,
            None => return 0,
        }
    }
    total
}

/// Symbol to pay this card with: its primary color, else generic.
#[must_use]
pub fn infer_pay_symbol(card: &CardView) -> ManaSymbol {
    card.primary_color()
        .map_or(ManaSymbol::Generic, ManaSymbol::from)
}

/// Add `pay_symbol × approx_cost` to the pool so the engine can take payment.
///
/// Does nothing for free cards. Pool failures are logged and swallowed: the
/// engine rejects the cast on its own if the pool still cannot pay.
pub fn ensure_payable(pool: &mut dyn ManaPool, card: &CardView) {
    let cost = approx_cost(card);
    if cost == 0 {
        return;
    }

    let symbol = infer_pay_symbol(card);
    trace!(card = %card.name, %symbol, cost, "synthesizing mana");

    if let Err(err) = pool.add_mana(symbol, cost) {
        warn!(card = %card.name, error = %err, "mana pool rejected synthesized mana");
    }
}
