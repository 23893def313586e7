//! Scarcity-ordered, fairness-aware assignment for a single period.
//!
//! Heuristic greedy solver with one level of backtracking. It can miss
//! assignments an exhaustive solver would find; callers treat
//! `InfeasibleAssignment` as a legitimate outcome, not a bug.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;
use tracing::{debug, warn};

use crate::error::{LineupError, Result};
use crate::models::{Player, PositionAssignment, PositionSlot};
use crate::rotation::RotationTracker;

/// One period's player pool and slot set.
pub struct PeriodRequest<'a> {
    /// 1-based period index.
    pub period: u32,
    /// Available players only; attendance filtering happens upstream.
    pub players: &'a [Player],
    pub slots: &'a [PositionSlot],
}

/// Fills one period's lineup, or fails with a diagnostic before any
/// assignment escapes. Holds no state of its own beyond the tracker
/// reference and the must-play threshold.
pub struct AssignmentEngine<'a> {
    tracker: &'a RotationTracker,
    must_play_threshold: u32,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(tracker: &'a RotationTracker) -> Self {
        AssignmentEngine {
            tracker,
            must_play_threshold: 2,
        }
    }

    pub fn with_must_play_threshold(mut self, threshold: u32) -> Self {
        self.must_play_threshold = threshold;
        self
    }

    /// Produce a complete assignment for the period.
    ///
    /// `excluded` is the sport-rule veto (e.g. pitcher cap exceeded); it
    /// is applied on top of preference eligibility. Ties are broken by
    /// the seeded `rng`, so identical inputs and seed reproduce identical
    /// output.
    pub fn assign_period<F>(
        &self,
        request: &PeriodRequest<'_>,
        excluded: F,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<PositionAssignment>>
    where
        F: Fn(&Player, &str) -> bool,
    {
        let players = request.players;
        let slots = request.slots;

        // Candidate pools per slot: eligible and not vetoed.
        let pools: Vec<Vec<usize>> = slots
            .iter()
            .map(|slot| {
                players
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| {
                        p.can_play_position(&slot.position_id) && !excluded(p, &slot.position_id)
                    })
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        // Feasibility check: no partial work when a required slot is dry.
        for (slot, pool) in slots.iter().zip(&pools) {
            if slot.required && pool.is_empty() {
                return Err(LineupError::MissingRequiredPosition {
                    position_id: slot.position_id.clone(),
                });
            }
        }

        let mut chosen: Vec<Option<usize>> = vec![None; slots.len()];
        let mut taken = vec![false; players.len()];
        let mut locked = vec![false; slots.len()];
        let mut fill_order: Vec<usize> = Vec::with_capacity(slots.len());

        self.lock_must_play(request, &pools, &mut chosen, &mut taken, &mut locked, &mut fill_order);

        // Scarcity order: tightest candidate pools first.
        let mut order: Vec<usize> = (0..slots.len()).filter(|&si| chosen[si].is_none()).collect();
        order.sort_by_key(|&si| (open_candidates(&pools[si], &taken), si));

        for si in order {
            if let Some(pi) = self.pick_candidate(
                players,
                &pools[si],
                &taken,
                &slots[si].position_id,
                request.period,
                rng,
            ) {
                chosen[si] = Some(pi);
                taken[pi] = true;
                fill_order.push(si);
                continue;
            }
            self.backtrack(
                request,
                &pools,
                &mut chosen,
                &mut taken,
                &locked,
                &mut fill_order,
                si,
                rng,
            )?;
        }

        let mut assignments = Vec::with_capacity(slots.len());
        for (si, slot) in slots.iter().enumerate() {
            let pi = chosen[si].ok_or(LineupError::InfeasibleAssignment {
                period: request.period,
            })?;
            assignments.push(PositionAssignment {
                player_id: players[pi].id.clone(),
                player_name: players[pi].name.clone(),
                position_id: slot.position_id.clone(),
            });
        }
        Ok(assignments)
    }

    /// Players at or past the bench-streak threshold are placed first,
    /// each into its scarcest open eligible slot so they don't starve a
    /// tight position later.
    fn lock_must_play(
        &self,
        request: &PeriodRequest<'_>,
        pools: &[Vec<usize>],
        chosen: &mut [Option<usize>],
        taken: &mut [bool],
        locked: &mut [bool],
        fill_order: &mut Vec<usize>,
    ) {
        let players = request.players;
        let streak = |pi: usize| self.tracker.bench_streak(&players[pi].id, request.period);

        let mut must_play: Vec<usize> = (0..players.len())
            .filter(|&pi| streak(pi) >= self.must_play_threshold as usize)
            .collect();
        must_play.sort_by(|&a, &b| {
            streak(b)
                .cmp(&streak(a))
                .then_with(|| players[a].id.cmp(&players[b].id))
        });

        for pi in must_play {
            let target = (0..request.slots.len())
                .filter(|&si| chosen[si].is_none() && pools[si].contains(&pi))
                .min_by_key(|&si| (open_candidates(&pools[si], taken), si));
            match target {
                Some(si) => {
                    debug!(
                        player = %players[pi].id,
                        position = %request.slots[si].position_id,
                        "must-play lock"
                    );
                    chosen[si] = Some(pi);
                    taken[pi] = true;
                    locked[si] = true;
                    fill_order.push(si);
                }
                None => {
                    // Feasible assignment may still exist for everyone else.
                    warn!(player = %players[pi].id, "must-play player has no open eligible slot");
                }
            }
        }
    }

    /// Best open candidate by (fewest periods at this position, longest
    /// bench streak), remaining ties broken by the seeded rng.
    fn pick_candidate(
        &self,
        players: &[Player],
        pool: &[usize],
        taken: &[bool],
        position_id: &str,
        period: u32,
        rng: &mut ChaCha8Rng,
    ) -> Option<usize> {
        let open: Vec<usize> = pool.iter().copied().filter(|&pi| !taken[pi]).collect();
        let key = |pi: usize| {
            (
                self.tracker.periods_at_position(&players[pi].id, position_id),
                Reverse(self.tracker.bench_streak(&players[pi].id, period)),
            )
        };
        let best = open.iter().copied().map(|pi| key(pi)).min()?;
        let tied: Vec<usize> = open.into_iter().filter(|&pi| key(pi) == best).collect();
        let winner = if tied.len() == 1 {
            tied[0]
        } else {
            tied[rng.gen_range(0..tied.len())]
        };
        Some(winner)
    }

    /// One-level correction: reclaim the conflicting player from the most
    /// recent optional assignment and refill that slot with its next-best
    /// candidate. No deeper search.
    #[allow(clippy::too_many_arguments)]
    fn backtrack(
        &self,
        request: &PeriodRequest<'_>,
        pools: &[Vec<usize>],
        chosen: &mut [Option<usize>],
        taken: &mut [bool],
        locked: &[bool],
        fill_order: &mut Vec<usize>,
        stuck: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<()> {
        let reclaim = fill_order.iter().rposition(|&sj| {
            !request.slots[sj].required
                && !locked[sj]
                && chosen[sj].is_some_and(|pj| pools[stuck].contains(&pj))
        });
        let Some(order_index) = reclaim else {
            return Err(LineupError::InfeasibleAssignment {
                period: request.period,
            });
        };
        let vacated = fill_order[order_index];
        let Some(moved) = chosen[vacated].take() else {
            return Err(LineupError::InfeasibleAssignment {
                period: request.period,
            });
        };
        debug!(
            player = %request.players[moved].id,
            from = %request.slots[vacated].position_id,
            to = %request.slots[stuck].position_id,
            "backtracking one optional assignment"
        );
        chosen[stuck] = Some(moved);
        fill_order.push(stuck);

        match self.pick_candidate(
            request.players,
            &pools[vacated],
            taken,
            &request.slots[vacated].position_id,
            request.period,
            rng,
        ) {
            Some(replacement) => {
                chosen[vacated] = Some(replacement);
                taken[replacement] = true;
                Ok(())
            }
            None => Err(LineupError::InfeasibleAssignment {
                period: request.period,
            }),
        }
    }
}

fn open_candidates(pool: &[usize], taken: &[bool]) -> usize {
    pool.iter().filter(|&&pi| !taken[pi]).count()
}
