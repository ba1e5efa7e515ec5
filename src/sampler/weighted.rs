//! Weighted sampler

use crate::error::{EventError, Result};
use rand::Rng;
use std::sync::Arc;

/// Anything carrying a relative selection mass
pub trait Weighted {
    fn weight(&self) -> f64;
}

impl<T: Weighted + ?Sized> Weighted for &T {
    #[inline]
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

impl<T: Weighted + ?Sized> Weighted for Arc<T> {
    #[inline]
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Negative, NaN and infinite weights carry no mass
#[inline(always)]
fn effective_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Pick an index from `items` with probability proportional to its weight.
///
/// Weights are relative and need not sum to 1. When no item has positive
/// weight the pick is uniform over the whole sequence.
pub fn sample_index_by<T, F, R>(items: &[T], weight_fn: F, rng: &mut R) -> Result<usize>
where
    F: Fn(&T) -> f64,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(EventError::EmptySequence);
    }

    let mut total: f64 = items.iter().map(|item| effective_weight(weight_fn(item))).sum();
    if total <= 0.0 {
        return Ok(rng.gen_range(0..items.len()));
    }

    // Finite weights can still overflow the sum; rescale so the largest is 1
    let mut scale = 1.0;
    if total.is_infinite() {
        let largest = items
            .iter()
            .map(|item| effective_weight(weight_fn(item)))
            .fold(0.0, f64::max);
        scale = 1.0 / largest;
        total = items
            .iter()
            .map(|item| effective_weight(weight_fn(item)) * scale)
            .sum();
    }

    let roll = rng.gen::<f64>() * total;
    let mut running = 0.0;
    let mut last_positive = 0;

    for (index, item) in items.iter().enumerate() {
        let weight = effective_weight(weight_fn(item)) * scale;
        if weight == 0.0 {
            continue;
        }
        running += weight;
        last_positive = index;
        if running > roll {
            return Ok(index);
        }
    }

    // Float rounding can leave the roll just past the final running sum
    Ok(last_positive)
}

/// Pick an item using an explicit weight accessor
#[inline]
pub fn sample_by<'a, T, F, R>(items: &'a [T], weight_fn: F, rng: &mut R) -> Result<&'a T>
where
    F: Fn(&T) -> f64,
    R: Rng + ?Sized,
{
    sample_index_by(items, weight_fn, rng).map(|index| &items[index])
}

/// Pick a [`Weighted`] item
#[inline]
pub fn sample<'a, T, R>(items: &'a [T], rng: &mut R) -> Result<&'a T>
where
    T: Weighted,
    R: Rng + ?Sized,
{
    sample_by(items, T::weight, rng)
}

/// Pick a [`Weighted`] item with the thread-local random source
pub fn sample_with_thread_rng<T: Weighted>(items: &[T]) -> Result<&T> {
    sample(items, &mut rand::thread_rng())
}
