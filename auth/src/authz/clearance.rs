// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security-clearance comparison and ladder maintenance
//!
//! Clearances live on a single ladder of dense, unique tiers starting at 1.
//! Comparing an actor's tier against a requirement is trivial; keeping the
//! ladder dense while administrators insert, move, and remove rungs is
//! where the care goes.  The planners here are pure functions from the
//! current ladder to a batch of [`TierAssignment`]s, and the whole batch is
//! applied by [`Storage::clearances_apply_tiers`] in one transaction so
//! readers never observe duplicate or gapped tiers.

use crate::context::OpContext;
use crate::storage::Storage;
use holonet_common::api::external::Error;
use holonet_common::api::external::ResourceType;
use holonet_common::api::external::UpdateResult;
use holonet_common::bail_unless;
use holonet_types::clearance::SecurityClearance;
use slog::debug;
use uuid::Uuid;

/// Returns whether a tier of `actor_tier` satisfies a requirement of
/// `required_tier`
///
/// No requirement admits everyone.  Any requirement at all rules out a
/// character with no clearance row.  Otherwise higher tiers satisfy lower
/// requirements.
pub fn has_clearance(
    actor_tier: Option<i32>,
    required_tier: Option<i32>,
) -> bool {
    match (required_tier, actor_tier) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(required), Some(actor)) => actor >= required,
    }
}

/// One planned tier write: `clearance_id` moves to `tier`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierAssignment {
    pub clearance_id: Uuid,
    pub tier: i32,
}

/// Plans the tier shifts needed to open a slot at `tier` for a new
/// clearance
///
/// `ladder` is the current ladder in ascending tier order.  Valid targets
/// are 1 through one past the top.  The returned batch covers only existing
/// rows; writing the new row at `tier` belongs to the caller, in the same
/// transaction as the shifts.
pub fn plan_insert(
    ladder: &[SecurityClearance],
    tier: i32,
) -> Result<Vec<TierAssignment>, Error> {
    check_dense(ladder)?;
    let top = ladder.len() as i32;
    if tier < 1 || tier > top + 1 {
        return Err(Error::invalid_request(&format!(
            "tier must be between 1 and {}",
            top + 1
        )));
    }
    Ok(ladder
        .iter()
        .filter(|clearance| clearance.tier >= tier)
        .map(|clearance| TierAssignment {
            clearance_id: clearance.id,
            tier: clearance.tier + 1,
        })
        .collect())
}

/// Plans the tier shifts that move an existing clearance to `new_tier`
///
/// Rungs between the old and new positions shift by one to close the old
/// slot and open the new one.  The batch contains only rows whose tier
/// actually changes; moving a clearance to its current tier plans nothing.
pub fn plan_move(
    ladder: &[SecurityClearance],
    clearance_id: Uuid,
    new_tier: i32,
) -> Result<Vec<TierAssignment>, Error> {
    check_dense(ladder)?;
    let current = ladder
        .iter()
        .find(|clearance| clearance.id == clearance_id)
        .map(|clearance| clearance.tier)
        .ok_or_else(|| {
            Error::not_found_by_id(
                ResourceType::SecurityClearance,
                &clearance_id,
            )
        })?;
    let top = ladder.len() as i32;
    if new_tier < 1 || new_tier > top {
        return Err(Error::invalid_request(&format!(
            "tier must be between 1 and {}",
            top
        )));
    }
    if new_tier == current {
        return Ok(Vec::new());
    }
    let mut plan = Vec::new();
    for clearance in ladder {
        let tier = if clearance.id == clearance_id {
            new_tier
        } else if current < new_tier
            && clearance.tier > current
            && clearance.tier <= new_tier
        {
            clearance.tier - 1
        } else if new_tier < current
            && clearance.tier >= new_tier
            && clearance.tier < current
        {
            clearance.tier + 1
        } else {
            continue;
        };
        plan.push(TierAssignment { clearance_id: clearance.id, tier });
    }
    Ok(plan)
}

/// Plans the tier shifts that close the slot left by removing a clearance
///
/// Deleting the row itself belongs to the caller, in the same transaction
/// as the shifts.
pub fn plan_remove(
    ladder: &[SecurityClearance],
    clearance_id: Uuid,
) -> Result<Vec<TierAssignment>, Error> {
    check_dense(ladder)?;
    let removed = ladder
        .iter()
        .find(|clearance| clearance.id == clearance_id)
        .map(|clearance| clearance.tier)
        .ok_or_else(|| {
            Error::not_found_by_id(
                ResourceType::SecurityClearance,
                &clearance_id,
            )
        })?;
    Ok(ladder
        .iter()
        .filter(|clearance| clearance.tier > removed)
        .map(|clearance| TierAssignment {
            clearance_id: clearance.id,
            tier: clearance.tier - 1,
        })
        .collect())
}

/// Moves a clearance to a new tier, shifting its neighbors to keep the
/// ladder dense
pub async fn clearance_move_to_tier(
    opctx: &OpContext,
    store: &dyn Storage,
    clearance_id: Uuid,
    new_tier: i32,
) -> UpdateResult<()> {
    let ladder = store.clearances_list(opctx).await?;
    let plan = plan_move(&ladder, clearance_id, new_tier)?;
    if plan.is_empty() {
        return Ok(());
    }
    debug!(
        opctx.log,
        "moving security clearance";
        "clearance_id" => clearance_id.to_string(),
        "new_tier" => new_tier,
        "rows_updated" => plan.len(),
    );
    store.clearances_apply_tiers(opctx, &plan).await
}

fn check_dense(ladder: &[SecurityClearance]) -> Result<(), Error> {
    for (i, clearance) in ladder.iter().enumerate() {
        bail_unless!(
            clearance.tier == i as i32 + 1,
            "clearance ladder is not dense: {:?} has tier {} at position {}",
            clearance.name,
            clearance.tier,
            i
        );
    }
    Ok(())
}
