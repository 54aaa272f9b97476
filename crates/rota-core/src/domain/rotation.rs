//! Rotation policy: decides which roomie gets which chore this week.
//!
//! This is the one piece of real judgment logic in the system, so it is kept
//! as pure functions: given the chore list, the roomie list and the week
//! offset, it returns the pairing without side effects. The runner executes
//! the resulting assignments.
//!
//! # Policy
//! The rotation is anchored to a fixed start date. Each run derives
//! `week_offset` = whole weeks elapsed since the anchor, and chore `i` goes
//! to roomie `(i + week_offset) mod |roomies|`. Properties:
//! - stateless: no history is stored, the calendar alone drives rotation;
//! - deterministic: same input order + same date ⇒ same pairing;
//! - weekly shift: successive weeks move every chore to the next roomie;
//! - cyclic fairness: with fewer roomies than chores, every roomie gets at
//!   least ⌊|chores|/|roomies|⌋ assignments.

use chrono::NaiveDate;

use super::records::{Chore, Roomie};

/// The anchor week of the rotation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    start: NaiveDate,
}

impl Rotation {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Whole weeks elapsed since the anchor date.
    ///
    /// Dates before the anchor yield a negative offset; `assign` wraps it
    /// with `rem_euclid`, so the rotation stays deterministic either way.
    pub fn week_offset(&self, today: NaiveDate) -> i64 {
        (today - self.start).num_days().div_euclid(7)
    }
}

/// One chore paired with the roomie responsible for it this week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub chore: &'a Chore,
    pub roomie: &'a Roomie,
}

/// Pair every chore with a roomie for the given week.
///
/// Returns exactly one [`Assignment`] per chore, in chore order. Counts may
/// differ in either direction; the roomie index wraps round-robin.
///
/// # Precondition
/// `roomies` must be non-empty when `chores` is non-empty; the runner
/// guards this before calling (an empty roomie list is a run error).
pub fn assign<'a>(
    chores: &'a [Chore],
    roomies: &'a [Roomie],
    week_offset: i64,
) -> Vec<Assignment<'a>> {
    debug_assert!(chores.is_empty() || !roomies.is_empty());

    chores
        .iter()
        .enumerate()
        .map(|(chore_idx, chore)| {
            let idx = (chore_idx as i64 + week_offset).rem_euclid(roomies.len() as i64) as usize;
            Assignment {
                chore,
                roomie: &roomies[idx],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{ChoreId, RoomieId};
    use rstest::rstest;

    fn chores(names: &[&str]) -> Vec<Chore> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Chore::new(ChoreId::new(format!("c{i}")), *name))
            .collect()
    }

    fn roomies(names: &[&str]) -> Vec<Roomie> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Roomie::new(RoomieId::new(format!("r{i}")), *name))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_chore_is_assigned_exactly_once() {
        let c = chores(&["dishes", "trash", "kitchen"]);
        let r = roomies(&["Alice", "Bob"]);

        let pairs = assign(&c, &r, 0);

        assert_eq!(pairs.len(), c.len());
        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.chore.id, c[i].id);
        }
    }

    #[test]
    fn week_zero_pairs_by_index() {
        let c = chores(&["dishes", "trash"]);
        let r = roomies(&["Alice", "Bob"]);

        let pairs = assign(&c, &r, 0);

        assert_eq!(pairs[0].roomie.name, "Alice");
        assert_eq!(pairs[1].roomie.name, "Bob");
    }

    #[rstest]
    #[case::week_one(1, &["Bob", "Carol", "Alice"])]
    #[case::week_two(2, &["Carol", "Alice", "Bob"])]
    #[case::full_cycle(3, &["Alice", "Bob", "Carol"])]
    #[case::before_anchor(-1, &["Carol", "Alice", "Bob"])]
    fn rotation_shifts_by_one_each_week(#[case] offset: i64, #[case] expected: &[&str]) {
        let c = chores(&["dishes", "trash", "kitchen"]);
        let r = roomies(&["Alice", "Bob", "Carol"]);

        let pairs = assign(&c, &r, offset);

        let got: Vec<&str> = pairs.iter().map(|p| p.roomie.name.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn fewer_roomies_than_chores_wraps_fairly() {
        let c = chores(&["a", "b", "c", "d", "e"]);
        let r = roomies(&["Alice", "Bob"]);

        let pairs = assign(&c, &r, 0);

        // Every roomie appears at least floor(5/2) = 2 times.
        for roomie in &r {
            let count = pairs.iter().filter(|p| p.roomie.id == roomie.id).count();
            assert!(count >= 2, "{} got only {count} chores", roomie.name);
        }
    }

    #[test]
    fn more_roomies_than_chores_leaves_some_idle() {
        let c = chores(&["dishes"]);
        let r = roomies(&["Alice", "Bob", "Carol"]);

        let pairs = assign(&c, &r, 1);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].roomie.name, "Bob");
    }

    #[test]
    fn assignment_is_deterministic() {
        let c = chores(&["a", "b", "c"]);
        let r = roomies(&["Alice", "Bob"]);

        let first: Vec<_> = assign(&c, &r, 4).iter().map(|p| p.roomie.id.clone()).collect();
        let second: Vec<_> = assign(&c, &r, 4).iter().map(|p| p.roomie.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn no_chores_means_no_assignments() {
        let r = roomies(&["Alice"]);
        assert!(assign(&[], &r, 0).is_empty());
    }

    #[rstest]
    #[case::same_day(date(2025, 12, 7), 0)]
    #[case::mid_week(date(2025, 12, 10), 0)]
    #[case::one_week(date(2025, 12, 14), 1)]
    #[case::ten_weeks(date(2026, 2, 15), 10)]
    #[case::day_before(date(2025, 12, 6), -1)]
    fn week_offset_counts_whole_weeks(#[case] today: NaiveDate, #[case] expected: i64) {
        let rotation = Rotation::new(date(2025, 12, 7));
        assert_eq!(rotation.week_offset(today), expected);
    }
}
