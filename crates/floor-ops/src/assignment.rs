//! # Assignment Coordinator
//!
//! Binds orders to chefs. The chef with the fewest assigned orders gets the next one;
//! ties go to the chef registered first (lowest id).
//!
//! [`select_chef`] is a pure choice over a roster snapshot. The mutating functions take
//! the roster's [`EntityStore`] and are only called from inside the chef actor, which
//! makes select-and-append a single step that no other request can interleave with.

use crate::chef_actor::ChefError;
use crate::model::{Chef, ChefId, OrderId};
use floor_actor::EntityStore;
use serde::{Deserialize, Serialize};

/// Outcome of moving an order between chefs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reassignment {
    pub order: OrderId,
    pub from: Option<ChefId>,
    pub to: ChefId,
}

impl Reassignment {
    pub fn is_noop(&self) -> bool {
        self.from == Some(self.to)
    }
}

/// Least loaded chef, earliest registered on ties. `None` for an empty roster.
pub fn select_chef<'a>(chefs: impl IntoIterator<Item = &'a Chef>) -> Option<ChefId> {
    chefs
        .into_iter()
        .min_by_key(|chef| (chef.load(), chef.id))
        .map(|chef| chef.id)
}

/// The chef whose board holds `order`, if any.
pub fn holder_of(order: OrderId, chefs: &EntityStore<Chef>) -> Option<ChefId> {
    chefs
        .values()
        .find(|chef| chef.holds(order))
        .map(|chef| chef.id)
}

/// Puts `order` on the least loaded chef's board.
///
/// An order that is already on a board stays where it is.
pub fn assign(order: OrderId, chefs: &mut EntityStore<Chef>) -> Option<ChefId> {
    if let Some(holder) = holder_of(order, chefs) {
        return Some(holder);
    }
    let chosen = select_chef(chefs.values())?;
    chefs.get_mut(&chosen)?.take(order);
    Some(chosen)
}

/// Moves `order` to `to`, taking it off whichever board held it.
///
/// Fails without touching the roster if `to` is not registered. Moving an order to the
/// chef that already holds it changes nothing.
pub fn reassign(
    order: OrderId,
    to: ChefId,
    chefs: &mut EntityStore<Chef>,
) -> Result<Reassignment, ChefError> {
    if !chefs.contains(&to) {
        return Err(ChefError::NotFound(to.to_string()));
    }

    let from = holder_of(order, chefs);
    let outcome = Reassignment { order, from, to };
    if outcome.is_noop() {
        return Ok(outcome);
    }

    if let Some(previous) = from.and_then(|id| chefs.get_mut(&id)) {
        previous.drop_order(order);
    }
    if let Some(next) = chefs.get_mut(&to) {
        next.take(order);
    }
    Ok(outcome)
}

/// Takes `order` off its chef's board. Returns the chef that held it.
pub fn release(order: OrderId, chefs: &mut EntityStore<Chef>) -> Option<ChefId> {
    let holder = holder_of(order, chefs)?;
    chefs.get_mut(&holder)?.drop_order(order);
    Some(holder)
}
