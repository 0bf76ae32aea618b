//! The display order of a task list

use std::cmp::Ordering;

use crate::task::{Priority, Task};

/// Sort tasks the way the list displays them.
///
/// The resulting order is, from the most significant key to the least significant one:
/// 1. completion status (tasks still to do come first),
/// 2. due date, most recent or future date first (tasks with no date come last),
/// 3. priority, `high` then `medium` then `low` (tasks with no priority come last).
///
/// This runs three stable single-key sorts from the least significant key to the most
/// significant one, which is equivalent to one composite sort. Each pass is stable, so
/// tasks with fully equal keys keep their relative input order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(priority_order);
    tasks.sort_by(date_order);
    tasks.sort_by(completion_order);
}

/// `high` before `medium` before `low` before no priority at all
fn priority_order(left: &Task, right: &Task) -> Ordering {
    Priority::sort_rank(left.priority()).cmp(&Priority::sort_rank(right.priority()))
}

/// Most recent date first; a task without a date goes after any task with one
fn date_order(left: &Task, right: &Task) -> Ordering {
    match (left.due(), right.due()) {
        (Some(l), Some(r)) => r.cmp(&l),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Tasks still to do before completed ones
fn completion_order(left: &Task, right: &Task) -> Ordering {
    left.completed().cmp(&right.completed())
}
