//! Lazy generation of repeating-interval elements.

use std::iter::FusedIterator;

use super::concrete::in_calendar;
use crate::iso::core::Moment;
use crate::iso::duration::{Direction, Shift};

#[derive(Debug, Clone, PartialEq)]
enum Step<D> {
    /// Apply the duration to the element yielded last.
    By {
        duration: D,
        direction: Direction,
        previous: Option<Moment>,
    },
    /// Yield this element next, then stop.
    Then(Option<Moment>),
}

/// A pull-based cursor over the elements of a repeating interval.
///
/// Each element is computed from the previous one, so calendar-relative
/// month steps clamp one step at a time (Jan 31, Feb 28, Mar 28, ...).
/// Nothing is computed ahead of the consumer: pulling `n` elements applies
/// the duration `n - 1` times. An unbounded recurrence only ends when the
/// next element would leave the supported year range.
///
/// Cloning yields an independent cursor at the same position.
#[derive(Debug, Clone, PartialEq)]
pub struct Recurrence<D> {
    first: Option<Moment>,
    step: Step<D>,
    remaining: Option<u32>,
}

impl<D> Recurrence<D> {
    /// Steps from `first` by `duration`; `limit` of `None` never stops.
    #[must_use]
    pub const fn stepping(
        first: Moment,
        duration: D,
        direction: Direction,
        limit: Option<u32>,
    ) -> Self {
        Self {
            first: Some(first),
            step: Step::By {
                duration,
                direction,
                previous: None,
            },
            remaining: limit,
        }
    }

    /// Yields `start` and then `end`, truncated to `limit` elements.
    #[must_use]
    pub const fn endpoints(start: Moment, end: Moment, limit: Option<u32>) -> Self {
        Self {
            first: Some(start),
            step: Step::Then(Some(end)),
            remaining: limit,
        }
    }

    /// The number of elements left to yield, `None` when unbounded.
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Reports whether the sequence has no fixed length.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.remaining.is_none()
    }

    const fn exhausted(&self) -> bool {
        if self.first.is_some() {
            return false;
        }
        match &self.step {
            Step::By { previous, .. } => previous.is_none(),
            Step::Then(end) => end.is_none(),
        }
    }
}

impl<D: Shift> Recurrence<D> {
    /// Computes the element after the one yielded last.
    fn advance(&mut self) -> Option<Moment> {
        match &mut self.step {
            Step::By {
                duration,
                direction,
                previous,
            } => {
                let last = previous.take()?;
                let following = last.shift(duration, *direction).filter(in_calendar);
                if following.is_none() {
                    tracing::trace!(%last, "Recurrence reached the end of the calendar");
                }
                following
            }
            Step::Then(end) => end.take(),
        }
    }
}

impl<D: Shift> Iterator for Recurrence<D> {
    type Item = Moment;

    fn next(&mut self) -> Option<Moment> {
        if self.remaining == Some(0) {
            return None;
        }
        let current = match self.first.take() {
            Some(first) => first,
            None => self.advance()?,
        };

        if let Step::By { previous, .. } = &mut self.step {
            *previous = Some(current.clone());
        }
        if let Some(remaining) = &mut self.remaining {
            *remaining -= 1;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted() || self.remaining == Some(0) {
            return (0, Some(0));
        }
        let lower = usize::from(self.first.is_some());
        (lower, self.remaining.and_then(|remaining| usize::try_from(remaining).ok()))
    }
}

impl<D: Shift> FusedIterator for Recurrence<D> {}
