// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The change-tracked style store.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::{Shape, Value};

/// Changes accumulated since the last poll: key to pre-change value, with
/// `None` marking a key that was previously absent.
pub type ChangeSet = HashMap<String, Option<Value>>;

/// Error reading a style attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleError {
    /// The key is not present and no default was supplied.
    KeyNotFound {
        /// The missing key.
        key: String,
    },
    /// The stored value does not satisfy the expected shape.
    TypeMismatch {
        /// The key that was read.
        key: String,
        /// The shape the caller expected.
        expected: Shape,
        /// The value actually stored.
        actual: Value,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound { key } => write!(f, "style has no attribute '{key}'"),
            Self::TypeMismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "style attribute '{key}' expected {expected}, got {} ({actual})",
                actual.kind()
            ),
        }
    }
}

impl std::error::Error for StyleError {}

#[derive(Debug, Default)]
struct StyleData {
    /// Insertion-ordered entries; styles are small, lookups are linear.
    entries: Vec<(String, Value)>,
    /// Pre-change value per key touched since the last poll.
    changes: ChangeSet,
}

/// A shared, insertion-ordered, change-tracked style store.
///
/// `Style` is a cheap handle (`Rc`-backed): cloning it shares the underlying
/// data, so a node and the callbacks mutating its appearance observe the same
/// store. All styling is single-threaded, frame-driven state; see the crate
/// docs for the change-tracking contract.
#[derive(Clone, Debug, Default)]
pub struct Style {
    inner: Rc<RefCell<StyleData>>,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a style from `(key, value)` pairs, preserving order.
    ///
    /// The initial contents count as changes, so the first poll reports them
    /// and the owning node gets drawn.
    #[must_use]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let style = Self::new();
        for (key, value) in pairs {
            style.set(key.into(), value);
        }
        style
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Returns the number of attributes set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Returns `true` if both handles share the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the stored value for `key`, if present.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Value> {
        let data = self.inner.borrow();
        data.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Returns the stored value for `key`.
    ///
    /// This is the attribute-access form: reading an attribute that was never
    /// set is an error rather than a silent default.
    ///
    /// # Errors
    ///
    /// [`StyleError::KeyNotFound`] when the key is absent.
    pub fn try_get(&self, key: &str) -> Result<Value, StyleError> {
        self.lookup(key).ok_or_else(|| StyleError::KeyNotFound {
            key: key.to_owned(),
        })
    }

    /// Returns the stored value for `key`, or `default` when absent.
    #[must_use]
    pub fn get(&self, key: &str, default: impl Into<Value>) -> Value {
        self.lookup(key).unwrap_or_else(|| default.into())
    }

    /// Returns the stored value for `key` checked against `expected`, or
    /// `default` when absent.
    ///
    /// The stored value is shape-checked; the caller-supplied default is
    /// trusted (it is typed at the call site).
    ///
    /// # Errors
    ///
    /// [`StyleError::TypeMismatch`] when a stored value does not satisfy
    /// `expected`.
    pub fn get_as(
        &self,
        key: &str,
        default: impl Into<Value>,
        expected: &Shape,
    ) -> Result<Value, StyleError> {
        match self.lookup(key) {
            None => Ok(default.into()),
            Some(value) => {
                if expected.matches(&value) {
                    Ok(value)
                } else {
                    Err(StyleError::TypeMismatch {
                        key: key.to_owned(),
                        expected: expected.clone(),
                        actual: value,
                    })
                }
            }
        }
    }

    /// Boolean attribute checked against [`Shape::Bool`].
    ///
    /// # Errors
    ///
    /// [`StyleError::TypeMismatch`] when the stored value is not a bool.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, StyleError> {
        let value = self.get_as(key, default, &Shape::Bool)?;
        Ok(value.as_bool().unwrap_or(default))
    }

    /// Numeric attribute checked against [`Shape::number`], with ints
    /// coerced to float.
    ///
    /// # Errors
    ///
    /// [`StyleError::TypeMismatch`] when the stored value is not numeric.
    pub fn get_f64(&self, key: &str, default: f64) -> Result<f64, StyleError> {
        let value = self.get_as(key, default, &Shape::number())?;
        Ok(value.as_f64().unwrap_or(default))
    }

    /// String attribute checked against [`Shape::Str`].
    ///
    /// # Errors
    ///
    /// [`StyleError::TypeMismatch`] when the stored value is not a string.
    pub fn get_str(&self, key: &str, default: &str) -> Result<String, StyleError> {
        let value = self.get_as(key, default, &Shape::Str)?;
        Ok(value
            .as_str()
            .map_or_else(|| default.to_owned(), str::to_owned))
    }

    /// Upserts `key`.
    ///
    /// The first write since the last poll that actually changes the value
    /// records the pre-write value in the change log (`None` when the key was
    /// absent). Writing the value a key already holds leaves the log
    /// untouched, and later writes within the same interval never overwrite
    /// the recorded previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut data = self.inner.borrow_mut();

        let slot = data.entries.iter().position(|(k, _)| *k == key);
        let previous = slot.map(|i| data.entries[i].1.clone());

        if previous.as_ref() != Some(&value) && !data.changes.contains_key(&key) {
            data.changes.insert(key.clone(), previous);
        }

        match slot {
            Some(i) => data.entries[i].1 = value,
            None => data.entries.push((key, value)),
        }
    }

    /// Returns and clears the changes accumulated since the last poll.
    ///
    /// Safe and cheap to call every frame: with no changes it returns an
    /// empty map.
    #[must_use]
    pub fn poll_changes(&self) -> ChangeSet {
        std::mem::take(&mut self.inner.borrow_mut().changes)
    }

    /// A snapshot of the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.inner.borrow().entries.clone()
    }
}
