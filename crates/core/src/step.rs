use thiserror::Error;
use tracing::trace;

use crate::{Combination, Layout};

/// Errors that can occur when stepping a combination.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError<V> {
    #[error("dial `{dial}` has no values defined")]
    EmptyDial { dial: String },

    #[error("invalid value for `{dial}` dial: {value:?}")]
    InvalidValue { dial: String, value: V },
}

/// Returns the combination that follows `current` under `layout`.
///
/// Dials are scanned from the last layout entry (least significant) toward the
/// first.
/// The first dial present in `current` is advanced to its next value; if it
/// was on its last value it wraps to the first and the carry moves on to the
/// next present dial.
/// Dials absent from `current` are skipped: they never block the carry and
/// never appear in the result.
/// Names in `current` that the layout does not define are carried through
/// unchanged.
///
/// Returns `Ok(None)` when every present dial wrapped, including when no
/// layout dial is present at all, meaning the combinations are exhausted.
///
/// `current` is never modified; the result is a fresh copy.
///
/// # Errors
///
/// Returns [`StepError::EmptyDial`] if the carry reaches a dial with no
/// values, or [`StepError::InvalidValue`] if it reaches a dial whose current
/// value is not one of its allowed values.
///
/// # Examples
///
/// ```
/// use tumbler_core::{Combination, Layout, next_combination};
///
/// let layout: Layout<u32> = [("section", vec![100, 101]), ("seat", vec![1, 2])]
///     .into_iter()
///     .collect();
///
/// let current: Combination<u32> = [("section", 100), ("seat", 2)].into_iter().collect();
/// let next = next_combination(&current, &layout).unwrap().unwrap();
/// assert_eq!(next.get("section"), Some(&101));
/// assert_eq!(next.get("seat"), Some(&1));
///
/// let last: Combination<u32> = [("section", 101), ("seat", 2)].into_iter().collect();
/// assert_eq!(next_combination(&last, &layout), Ok(None));
/// ```
pub fn next_combination<V>(
    current: &Combination<V>,
    layout: &Layout<V>,
) -> Result<Option<Combination<V>>, StepError<V>>
where
    V: Clone + PartialEq,
{
    step_over(current, layout.iter())
}

/// Steps `current` over `dials`, given most significant first.
pub(crate) fn step_over<'a, V, I>(
    current: &Combination<V>,
    dials: I,
) -> Result<Option<Combination<V>>, StepError<V>>
where
    V: Clone + PartialEq + 'a,
    I: DoubleEndedIterator<Item = (&'a str, &'a [V])>,
{
    let mut next = current.clone();

    for (name, values) in dials.rev() {
        let Some(value) = next.get_mut(name) else {
            continue;
        };

        if values.is_empty() {
            return Err(StepError::EmptyDial {
                dial: name.to_string(),
            });
        }

        let index = values
            .iter()
            .position(|v| *v == *value)
            .ok_or_else(|| StepError::InvalidValue {
                dial: name.to_string(),
                value: value.clone(),
            })?;

        if let Some(following) = values.get(index + 1) {
            *value = following.clone();
            return Ok(Some(next));
        }

        trace!(dial = name, "carry");
        *value = values[0].clone();
    }

    Ok(None)
}
