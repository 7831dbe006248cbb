//! Batched property store
//!
//! Widgets record style changes here instead of writing them straight to
//! their drawable. Each registered property keeps a pending value and a dirty
//! flag; [`PropertyStore::apply`] pushes only the dirty ones to the bound
//! target, so any number of changes between two render passes costs at most
//! one push per property.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::ui::widgets::{LayoutGuard, SuspendLayout, TextDrawFont};

/// Error type returned by property push functions
pub type ApplyError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by property push functions
pub type ApplyResult = Result<(), ApplyError>;

/// Errors raised by [`PropertyStore`]
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// The property was never registered
    #[error("Unknown property '{0}'")]
    Unknown(&'static str),

    /// The property was registered twice
    #[error("Property '{0}' is already registered")]
    Duplicate(&'static str),

    /// The property has not been given a value yet
    #[error("Property '{0}' has no value")]
    Unset(&'static str),

    /// The value type does not match the registered type
    #[error("Property '{name}' holds {expected} values, not {found}")]
    TypeMismatch {
        /// Property name
        name: &'static str,
        /// Type the property was registered with
        expected: &'static str,
        /// Type that was requested or supplied
        found: &'static str,
    },

    /// The push function rejected the value
    #[error("Failed to apply property '{name}': {source}")]
    Apply {
        /// Property name
        name: &'static str,
        /// Error reported by the push function
        #[source]
        source: ApplyError,
    },
}

/// Identifier of a property within a store
pub trait PropertyKey: Copy + Eq + Hash + fmt::Debug {
    /// Stable display name
    fn name(self) -> &'static str;
}

/// Type-erased property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Font style
    Font(TextDrawFont),
    /// Packed color
    Color(Color),
    /// 2D vector
    Vector(Vec2),
    /// Integer
    Int(i32),
    /// Flag
    Bool(bool),
    /// Text
    Text(String),
}

/// Types that can be stored in a [`PropertyStore`]
pub trait PropertyType: Clone + PartialEq + 'static {
    /// Name used in type mismatch errors
    const KIND: &'static str;

    /// Wrap the value
    fn into_value(self) -> PropertyValue;

    /// Borrow the value back out, `None` if it holds another type
    fn from_value(value: &PropertyValue) -> Option<&Self>;
}

macro_rules! impl_property_type {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl PropertyType for $ty {
            const KIND: &'static str = $kind;

            fn into_value(self) -> PropertyValue {
                PropertyValue::$variant(self)
            }

            fn from_value(value: &PropertyValue) -> Option<&Self> {
                match value {
                    PropertyValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

impl_property_type!(TextDrawFont, Font, "font");
impl_property_type!(Color, Color, "color");
impl_property_type!(Vec2, Vector, "vector");
impl_property_type!(i32, Int, "int");
impl_property_type!(bool, Bool, "bool");
impl_property_type!(String, Text, "text");

type ApplyFn<T> = Box<dyn Fn(&mut T, &PropertyValue) -> ApplyResult>;

/// One registered property
struct BatchedProperty<T> {
    kind: &'static str,
    apply: ApplyFn<T>,
    value: Option<PropertyValue>,
    dirty: bool,
}

/// Key-indexed store of pending property values for one target
///
/// The store owns its target once bound. Properties are registered up front
/// and never removed.
pub struct PropertyStore<K: PropertyKey, T> {
    properties: HashMap<K, BatchedProperty<T>>,
    target: Option<T>,
}

impl<K: PropertyKey, T> PropertyStore<K, T> {
    /// Create an empty, unbound store
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            target: None,
        }
    }

    /// Register a property and the function that pushes it onto the target
    ///
    /// The property starts without a value and clean.
    pub fn register<V, F>(&mut self, key: K, apply: F) -> Result<(), PropertyError>
    where
        V: PropertyType,
        F: Fn(&mut T, &V) -> ApplyResult + 'static,
    {
        if self.properties.contains_key(&key) {
            return Err(PropertyError::Duplicate(key.name()));
        }

        let name = key.name();
        let apply: ApplyFn<T> = Box::new(move |target, value| match V::from_value(value) {
            Some(value) => apply(target, value),
            None => Err(PropertyError::TypeMismatch {
                name,
                expected: V::KIND,
                found: value_kind(value),
            }
            .into()),
        });

        self.properties.insert(key, BatchedProperty {
            kind: V::KIND,
            apply,
            value: None,
            dirty: false,
        });
        Ok(())
    }

    /// Bind a target, returning the previously bound one
    pub fn bind(&mut self, target: T) -> Option<T> {
        self.target.replace(target)
    }

    /// Remove the bound target; dirty flags are kept for the next binding
    pub fn unbind(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Whether a target is bound
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Bound target
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Bound target, mutably. Writes made through this bypass batching.
    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    /// Whether `key` is registered
    pub fn contains(&self, key: K) -> bool {
        self.properties.contains_key(&key)
    }

    /// Current pending value of a property
    pub fn get<V: PropertyType>(&self, key: K) -> Result<&V, PropertyError> {
        let property = self.property(key)?;
        let value = property.value.as_ref().ok_or(PropertyError::Unset(key.name()))?;
        V::from_value(value).ok_or(PropertyError::TypeMismatch {
            name: key.name(),
            expected: property.kind,
            found: V::KIND,
        })
    }

    /// Record a new value for a property
    ///
    /// Returns `true` and marks the property dirty if the value differs from
    /// the recorded one (or none was recorded). Returns `false` and leaves the
    /// store untouched otherwise. Redraws should be gated on this result.
    pub fn set<V: PropertyType>(&mut self, key: K, value: V) -> Result<bool, PropertyError> {
        let property = self
            .properties
            .get_mut(&key)
            .ok_or(PropertyError::Unknown(key.name()))?;

        if property.kind != V::KIND {
            return Err(PropertyError::TypeMismatch {
                name: key.name(),
                expected: property.kind,
                found: V::KIND,
            });
        }

        if property.value.as_ref().and_then(V::from_value) == Some(&value) {
            return Ok(false);
        }

        property.value = Some(value.into_value());
        property.dirty = true;
        Ok(true)
    }

    /// Whether a property has a value that has not been pushed yet
    pub fn is_dirty(&self, key: K) -> Result<bool, PropertyError> {
        Ok(self.property(key)?.dirty)
    }

    /// Number of properties waiting to be pushed
    pub fn dirty_count(&self) -> usize {
        self.properties.values().filter(|property| property.dirty).count()
    }

    /// Push every dirty property onto the bound target
    ///
    /// Returns the number of pushes. Without a target nothing is pushed and
    /// dirty flags are preserved. Push order across properties is unspecified.
    /// If a push fails the error is returned and that property stays dirty.
    pub fn apply(&mut self) -> Result<usize, PropertyError> {
        match self.target.as_mut() {
            Some(target) => push_dirty(&mut self.properties, target),
            None => {
                log::trace!("Skipping apply, no target bound ({} dirty)", self.dirty_count());
                Ok(0)
            }
        }
    }

    /// Like [`apply`](Self::apply), with the target's layout suspended for the
    /// duration of the pushes
    pub fn apply_suspended(&mut self) -> Result<usize, PropertyError>
    where
        T: SuspendLayout,
    {
        match self.target.as_mut() {
            Some(target) => {
                let mut guard = LayoutGuard::new(target);
                push_dirty(&mut self.properties, &mut *guard)
            }
            None => {
                log::trace!("Skipping apply, no target bound ({} dirty)", self.dirty_count());
                Ok(0)
            }
        }
    }

    fn property(&self, key: K) -> Result<&BatchedProperty<T>, PropertyError> {
        self.properties.get(&key).ok_or(PropertyError::Unknown(key.name()))
    }
}

impl<K: PropertyKey, T> Default for PropertyStore<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn push_dirty<K: PropertyKey, T>(
    properties: &mut HashMap<K, BatchedProperty<T>>,
    target: &mut T,
) -> Result<usize, PropertyError> {
    let mut pushed = 0;
    for (key, property) in properties.iter_mut().filter(|(_, property)| property.dirty) {
        if let Some(value) = &property.value {
            log::debug!("Applying property {} = {:?}", key.name(), value);
            (property.apply)(target, value)
                .map_err(|source| PropertyError::Apply { name: key.name(), source })?;
        }
        property.dirty = false;
        pushed += 1;
    }
    Ok(pushed)
}

fn value_kind(value: &PropertyValue) -> &'static str {
    match value {
        PropertyValue::Font(_) => TextDrawFont::KIND,
        PropertyValue::Color(_) => Color::KIND,
        PropertyValue::Vector(_) => Vec2::KIND,
        PropertyValue::Int(_) => i32::KIND,
        PropertyValue::Bool(_) => bool::KIND,
        PropertyValue::Text(_) => String::KIND,
    }
}
