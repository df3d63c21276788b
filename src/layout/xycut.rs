//! Recursive X-Y cut over positioned elements.
//!
//! The engine repeatedly splits a set of elements in two at a whitespace
//! gap until no qualifying gap remains. Which gaps qualify, and which of
//! them is best, is decided by a [`CutScorer`]; the engine only enumerates
//! candidates in sweep order and keeps the best positive score.
//!
//! # Algorithm
//!
//! 1. A set with at most one element is a leaf.
//! 2. For the first axis in [`AxisOrder`], sort the elements along the
//!    sweep direction and walk them, tracking how far the elements seen so
//!    far reach. Whenever the next element starts beyond that reach by at
//!    least the minimum gap, the two prefixes form a candidate split.
//! 3. Score every candidate; the highest positive score wins, ties go to
//!    the earliest candidate in sweep order.
//! 4. Without a winner, try the other axis. Without a winner there either,
//!    the set is a leaf.
//! 5. Otherwise recurse into both halves and concatenate their leaves in
//!    sweep order.
//!
//! Every split produces two non-empty halves, so recursion terminates.

use crate::model::{compare_extent, Extent, HasBoundingBox};

use super::options::{AxisOrder, CutOptions, HorizontalSweep, VerticalSweep};

/// Scores candidate two-way splits for the cut engine.
///
/// A score `<= 0` rejects the candidate. Halves are always passed in
/// geometric order (left before right, upper before lower) regardless of
/// the sweep direction.
pub trait CutScorer<T> {
    /// Score splitting into a left and a right half.
    fn score_vertical(&self, left: &[T], right: &[T]) -> f32;

    /// Score splitting into an upper and a lower half.
    fn score_horizontal(&self, upper: &[T], lower: &[T]) -> f32;
}

/// The recursive cut engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct XyCut {
    options: CutOptions,
}

impl XyCut {
    pub fn new(options: CutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CutOptions {
        &self.options
    }

    /// Partition `elements` into leaves.
    ///
    /// Every input element appears in exactly one leaf. An empty input
    /// yields no leaves.
    pub fn cut<T, S>(&self, elements: Vec<T>, scorer: &S) -> Vec<Vec<T>>
    where
        T: HasBoundingBox,
        S: CutScorer<T> + ?Sized,
    {
        let mut leaves = Vec::new();
        if !elements.is_empty() {
            self.cut_into(elements, scorer, &mut leaves);
        }
        leaves
    }

    fn cut_into<T, S>(&self, mut elements: Vec<T>, scorer: &S, leaves: &mut Vec<Vec<T>>)
    where
        T: HasBoundingBox,
        S: CutScorer<T> + ?Sized,
    {
        if elements.len() <= 1 {
            leaves.push(elements);
            return;
        }

        let split = match self.options.axis_order {
            AxisOrder::VerticalFirst => match self.vertical_split(&mut elements, scorer) {
                Some(index) => Some(index),
                None => self.horizontal_split(&mut elements, scorer),
            },
            AxisOrder::HorizontalFirst => match self.horizontal_split(&mut elements, scorer) {
                Some(index) => Some(index),
                None => self.vertical_split(&mut elements, scorer),
            },
        };

        match split {
            Some(index) => {
                let second = elements.split_off(index);
                log::trace!("cut {} | {} elements", elements.len(), second.len());
                self.cut_into(elements, scorer, leaves);
                self.cut_into(second, scorer, leaves);
            }
            None => leaves.push(elements),
        }
    }

    /// Find the best split index along the X axis, leaving `elements`
    /// sorted in sweep order.
    fn vertical_split<T, S>(&self, elements: &mut [T], scorer: &S) -> Option<usize>
    where
        T: HasBoundingBox,
        S: CutScorer<T> + ?Sized,
    {
        let forward = self.options.vertical_sweep == VerticalSweep::LeftToRight;
        if forward {
            elements.sort_by(|a, b| compare_extent(a, b, Extent::MinX, false));
        } else {
            elements.sort_by(|a, b| compare_extent(a, b, Extent::MaxX, true));
        }

        let min_gap = self.options.min_vertical_gap;
        let mut best: Option<(usize, f32)> = None;
        let mut reach: Option<f32> = None;

        for index in 1..elements.len() {
            let (Some(prev), Some(current)) = (
                elements[index - 1].bounding_box(),
                elements[index].bounding_box(),
            ) else {
                break;
            };
            let edge = if forward { prev.max_x() } else { prev.min_x() };
            let reached = match reach {
                Some(r) if forward => r.max(edge),
                Some(r) => r.min(edge),
                None => edge,
            };
            reach = Some(reached);

            let gap = if forward {
                current.min_x() - reached
            } else {
                reached - current.max_x()
            };
            if gap <= 0.0 || gap < min_gap {
                continue;
            }

            let (first, second) = elements.split_at(index);
            let score = if forward {
                scorer.score_vertical(first, second)
            } else {
                scorer.score_vertical(second, first)
            };
            if score > 0.0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((index, score));
            }
        }

        best.map(|(index, _)| index)
    }

    /// Find the best split index along the Y axis, leaving `elements`
    /// sorted in sweep order.
    fn horizontal_split<T, S>(&self, elements: &mut [T], scorer: &S) -> Option<usize>
    where
        T: HasBoundingBox,
        S: CutScorer<T> + ?Sized,
    {
        let forward = self.options.horizontal_sweep == HorizontalSweep::TopToBottom;
        if forward {
            elements.sort_by(|a, b| compare_extent(a, b, Extent::MaxY, true));
        } else {
            elements.sort_by(|a, b| compare_extent(a, b, Extent::MinY, false));
        }

        let min_gap = self.options.min_horizontal_gap;
        let mut best: Option<(usize, f32)> = None;
        let mut reach: Option<f32> = None;

        for index in 1..elements.len() {
            let (Some(prev), Some(current)) = (
                elements[index - 1].bounding_box(),
                elements[index].bounding_box(),
            ) else {
                break;
            };
            let edge = if forward { prev.min_y() } else { prev.max_y() };
            let reached = match reach {
                Some(r) if forward => r.min(edge),
                Some(r) => r.max(edge),
                None => edge,
            };
            reach = Some(reached);

            let gap = if forward {
                reached - current.max_y()
            } else {
                current.min_y() - reached
            };
            if gap <= 0.0 || gap < min_gap {
                continue;
            }

            let (first, second) = elements.split_at(index);
            let score = if forward {
                scorer.score_horizontal(first, second)
            } else {
                scorer.score_horizontal(second, first)
            };
            if score > 0.0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((index, score));
            }
        }

        best.map(|(index, _)| index)
    }
}
