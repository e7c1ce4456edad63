use thiserror::Error;
use tracing::{debug, trace};

use crate::{Combination, Dial, DialError, Layout, StepError, step::step_over};

/// Enumerates every combination of a fixed, ordered set of dials.
///
/// The first dial is the most significant and the last is the least
/// significant.
/// Each tick increments the last dial and carries into earlier dials as they
/// wrap, so combinations are visited in lexicographic order of dial indices.
/// Once the carry runs past the first dial the odometer is exhausted and stays
/// exhausted until [`Odometer::reset`] is called.
///
/// An `Odometer` is also an [`Iterator`] that yields each combination once,
/// starting from the current one.
/// After it returns `None` it keeps returning `None` until [`Odometer::reset`]
/// or [`Odometer::seek`] repositions it, so it is not a
/// [`FusedIterator`](std::iter::FusedIterator).
///
/// # Examples
///
/// ```
/// use tumbler_core::{Layout, Odometer};
///
/// let layout: Layout<char> = [("row", vec!['A', 'B']), ("seat", vec!['1', '2'])]
///     .into_iter()
///     .collect();
/// let mut odometer = Odometer::new(layout).unwrap();
///
/// let seats: Vec<String> = odometer
///     .by_ref()
///     .map(|combo| combo.iter().map(|(_, v)| *v).collect())
///     .collect();
/// assert_eq!(seats, ["A1", "A2", "B1", "B2"]);
///
/// assert!(odometer.is_exhausted());
/// assert_eq!(odometer.current(), None);
///
/// let first = odometer.reset().unwrap();
/// assert_eq!(first.get("row"), Some(&'A'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer<V> {
    dials: Vec<Dial<V>>,
    exhausted: bool,
}

/// Errors that can occur when building an [`Odometer`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OdometerError {
    #[error("invalid dial at index {index}")]
    Dial {
        index: usize,
        #[source]
        source: DialError,
    },

    #[error("duplicate dial name `{name}` at index {index}")]
    DuplicateName { index: usize, name: String },
}

impl<V> Odometer<V> {
    /// Builds an odometer with one dial per layout entry, in layout order.
    ///
    /// # Errors
    ///
    /// Returns [`OdometerError::Dial`] naming the first entry that is not a
    /// valid dial.
    pub fn new(layout: Layout<V>) -> Result<Self, OdometerError> {
        Self::try_from_iter(layout)
    }

    /// Builds an odometer from `(name, values)` pairs, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`OdometerError::Dial`] if an entry is not a valid dial, or
    /// [`OdometerError::DuplicateName`] if a name repeats.
    pub fn try_from_iter<I, S>(entries: I) -> Result<Self, OdometerError>
    where
        I: IntoIterator<Item = (S, Vec<V>)>,
        S: Into<String>,
    {
        let dials = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, values))| {
                Dial::new(name, values).map_err(|source| OdometerError::Dial { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_dials(dials)
    }

    /// Builds an odometer from pre-built dials, most significant first.
    ///
    /// Each dial is reset to its first value.
    ///
    /// # Errors
    ///
    /// Returns [`OdometerError::DuplicateName`] naming the position of the
    /// first dial whose name was already used by an earlier dial.
    pub fn from_dials(mut dials: Vec<Dial<V>>) -> Result<Self, OdometerError> {
        for index in 1..dials.len() {
            let name = dials[index].name();
            if dials[..index].iter().any(|dial| dial.name() == name) {
                return Err(OdometerError::DuplicateName {
                    index,
                    name: name.to_string(),
                });
            }
        }

        dials.iter_mut().for_each(Dial::reset);

        Ok(Self {
            dials,
            exhausted: false,
        })
    }

    /// Returns the dials, most significant first.
    #[must_use]
    pub fn dials(&self) -> &[Dial<V>] {
        &self.dials
    }

    /// Returns the dial called `name`.
    #[must_use]
    pub fn dial(&self, name: &str) -> Option<&Dial<V>> {
        self.dials.iter().find(|dial| dial.name() == name)
    }

    /// Returns `true` once every combination has been produced.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the total number of combinations, or `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.dials
            .iter()
            .try_fold(1_usize, |total, dial| total.checked_mul(dial.len()))
    }

    /// Returns how many combinations are left to yield, including the current
    /// one, or `None` on overflow.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }

        // Mixed-radix rank of the current position, most significant first.
        let rank = self.dials.iter().try_fold(0_usize, |rank, dial| {
            rank.checked_mul(dial.len())?.checked_add(dial.position())
        })?;

        Some(self.total()? - rank)
    }

    /// Performs one tick and returns the new combination.
    ///
    /// Returns `None` if the tick carried past the most significant dial, or
    /// if the odometer was already exhausted.
    pub fn advance(&mut self) -> Option<Combination<V>>
    where
        V: Clone,
    {
        self.tick();
        self.current()
    }

    /// Moves every dial to its first value and clears the exhausted state.
    ///
    /// Returns the first combination.
    pub fn reset(&mut self) -> Option<Combination<V>>
    where
        V: Clone,
    {
        self.dials.iter_mut().for_each(Dial::reset);
        self.exhausted = false;
        debug!(dials = self.dials.len(), "odometer reset");
        self.current()
    }

    /// Returns the current combination, or `None` if exhausted.
    #[must_use]
    pub fn current(&self) -> Option<Combination<V>>
    where
        V: Clone,
    {
        if self.exhausted {
            return None;
        }

        let mut combination = Combination::with_capacity(self.dials.len());
        for dial in &self.dials {
            combination.insert(dial.name(), dial.current_value().clone());
        }
        Some(combination)
    }

    /// Returns the current combination and then advances past it.
    ///
    /// Returns `None` once the odometer is exhausted.
    pub fn try_next(&mut self) -> Option<Combination<V>>
    where
        V: Clone,
    {
        let combination = self.current()?;
        self.tick();
        Some(combination)
    }

    /// Returns the dial definitions as a [`Layout`].
    #[must_use]
    pub fn layout(&self) -> Layout<V>
    where
        V: Clone,
    {
        self.dials
            .iter()
            .map(|dial| (dial.name(), dial.values().to_vec()))
            .collect()
    }

    /// Returns the combination after `current` under this odometer's dials,
    /// without changing the odometer.
    ///
    /// Dials missing from `current` are skipped, as in
    /// [`next_combination`](crate::next_combination).
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidValue`] if the carry reaches a dial whose
    /// value in `current` is not allowed.
    pub fn next_after(
        &self,
        current: &Combination<V>,
    ) -> Result<Option<Combination<V>>, StepError<V>>
    where
        V: Clone + PartialEq,
    {
        step_over(
            current,
            self.dials.iter().map(|dial| (dial.name(), dial.values())),
        )
    }

    /// Positions the dials named in `combination` on the given values and
    /// clears the exhausted state.
    ///
    /// Dials missing from `combination` keep their position, and names that
    /// are not dials of this odometer are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidValue`] if a value is not allowed on its
    /// dial. No dial is moved in that case.
    pub fn seek(&mut self, combination: &Combination<V>) -> Result<(), StepError<V>>
    where
        V: Clone + PartialEq,
    {
        let targets = self
            .dials
            .iter()
            .enumerate()
            .filter_map(|(slot, dial)| {
                let value = combination.get(dial.name())?;
                Some(
                    dial.index_of(value)
                        .map(|index| (slot, index))
                        .ok_or_else(|| StepError::InvalidValue {
                            dial: dial.name().to_string(),
                            value: value.clone(),
                        }),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (slot, index) in targets {
            self.dials[slot].set_position(index);
        }

        self.exhausted = false;
        debug!(dials = self.dials.len(), "odometer repositioned");
        Ok(())
    }

    /// Increments from the least significant dial, carrying as needed.
    fn tick(&mut self) {
        if self.exhausted {
            return;
        }

        for dial in self.dials.iter_mut().rev() {
            if !dial.increment() {
                return;
            }
            trace!(dial = dial.name(), "carry");
        }

        self.exhausted = true;
        debug!(dials = self.dials.len(), "odometer exhausted");
    }
}

impl<V: Clone> Iterator for Odometer<V> {
    type Item = Combination<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<V> TryFrom<Layout<V>> for Odometer<V> {
    type Error = OdometerError;

    fn try_from(layout: Layout<V>) -> Result<Self, Self::Error> {
        Self::new(layout)
    }
}

impl<V> TryFrom<Vec<Dial<V>>> for Odometer<V> {
    type Error = OdometerError;

    fn try_from(dials: Vec<Dial<V>>) -> Result<Self, Self::Error> {
        Self::from_dials(dials)
    }
}

impl<V> From<Odometer<V>> for Layout<V> {
    fn from(odometer: Odometer<V>) -> Self {
        odometer.dials.into_iter().map(Dial::into_parts).collect()
    }
}
