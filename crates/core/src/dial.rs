use thiserror::Error;

/// A named, ordered, finite list of allowed values with a cursor.
///
/// A `Dial` always holds at least one value, and its cursor always points at
/// one of them.
/// The cursor starts on the first value and is moved by [`Dial::increment`],
/// which wraps back to the first value after the last one and reports a carry.
///
/// # Examples
///
/// ```
/// use tumbler_core::Dial;
///
/// let mut row = Dial::new("row", vec!['A', 'B']).unwrap();
/// assert_eq!(row.current_value(), &'A');
///
/// assert!(!row.increment());
/// assert_eq!(row.current_value(), &'B');
///
/// // Wrapping around signals a carry.
/// assert!(row.increment());
/// assert_eq!(row.current_value(), &'A');
///
/// assert!(Dial::<char>::new("row", vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial<V> {
    name: String,
    values: Vec<V>,
    position: usize,
}

/// Errors that can occur when building or positioning a [`Dial`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialError {
    #[error("dial name cannot be empty")]
    EmptyName,

    #[error("dial `{name}` has no values defined")]
    NoValues { name: String },

    #[error("value is not allowed on dial `{name}`")]
    UnknownValue { name: String },
}

impl<V> Dial<V> {
    /// Creates a new `Dial` positioned on its first value.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::EmptyName`] if `name` is empty, or
    /// [`DialError::NoValues`] if `values` is empty.
    pub fn new(name: impl Into<String>, values: Vec<V>) -> Result<Self, DialError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DialError::EmptyName);
        }
        if values.is_empty() {
            return Err(DialError::NoValues { name });
        }

        Ok(Self {
            name,
            values,
            position: 0,
        })
    }

    /// Returns the dial's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the allowed values in order.
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Returns the number of allowed values, which is never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the cursor index.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the value under the cursor.
    #[must_use]
    pub fn current_value(&self) -> &V {
        &self.values[self.position]
    }

    /// Returns `true` if the cursor is on the last value.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.position + 1 == self.values.len()
    }

    /// Advances the cursor by one value.
    ///
    /// Returns `true` when the cursor was on the last value and wrapped back
    /// to the first, meaning the next more-significant dial must advance too.
    #[must_use = "the carry decides whether the next dial advances"]
    pub fn increment(&mut self) -> bool {
        if self.is_at_last() {
            self.position = 0;
            true
        } else {
            self.position += 1;
            false
        }
    }

    /// Moves the cursor back to the first value.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to `index`, which must be in bounds.
    pub(crate) fn set_position(&mut self, index: usize) {
        debug_assert!(index < self.values.len());
        self.position = index;
    }

    /// Consumes the dial, returning its name and values.
    pub(crate) fn into_parts(self) -> (String, Vec<V>) {
        (self.name, self.values)
    }
}

impl<V: PartialEq> Dial<V> {
    /// Returns the index of `value` among the allowed values, if present.
    ///
    /// If a value appears more than once, the first index is returned.
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Moves the cursor onto `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::UnknownValue`] if `value` is not allowed on this
    /// dial. The cursor is left unchanged in that case.
    pub fn set_value(&mut self, value: &V) -> Result<(), DialError> {
        let index = self.index_of(value).ok_or_else(|| DialError::UnknownValue {
            name: self.name.clone(),
        })?;
        self.position = index;
        Ok(())
    }
}
