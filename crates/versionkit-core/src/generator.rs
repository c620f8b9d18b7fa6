use crate::error::VersionError;
use crate::registry::SequenceRegistry;
use crate::sequence::Sequence;
use crate::types::{ScalarKind, TypeDescriptor};
use std::fmt;

/// When an auto-generated attribute is (re)computed on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStrategy {
    /// On every write, whatever the current value.
    Always,
    /// Only when the record has no value yet.
    Create,
}

impl GenerateStrategy {
    pub fn applies(self, current_present: bool) -> bool {
        match self {
            GenerateStrategy::Always => true,
            GenerateStrategy::Create => !current_present,
        }
    }
}

/// Produces the value a persistence layer writes for an auto-generated field.
pub trait AutoGenerator<T> {
    fn strategy(&self) -> GenerateStrategy;

    fn generate(&self, current: Option<&T>) -> T;

    /// Value to write for this field, or `None` when the current one is kept.
    fn apply(&self, current: Option<&T>) -> Option<T> {
        if self.strategy().applies(current.is_some()) {
            Some(self.generate(current))
        } else {
            None
        }
    }
}

/// Optimistic-locking version generator bound to one field type.
///
/// Binding resolves the sequence once, so an unsupported field type is
/// reported when the field is set up rather than on its first write.
pub struct VersionGenerator<T: 'static> {
    kind: ScalarKind,
    sequence: &'static dyn Sequence<T>,
}

impl<T: 'static> VersionGenerator<T> {
    pub fn bind() -> Result<Self, VersionError> {
        Self::bind_to(&TypeDescriptor::of::<T>())
    }

    pub fn bind_to(descriptor: &TypeDescriptor) -> Result<Self, VersionError> {
        let registry = SequenceRegistry::global();
        let kind = registry.lookup(descriptor)?;
        let sequence = registry.sequence::<T>(descriptor)?;
        Ok(Self { kind, sequence })
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// `init()` for a new record, otherwise the successor of `current`.
    pub fn generate(&self, current: Option<&T>) -> T {
        match current {
            None => self.sequence.init(),
            Some(value) => self.sequence.next(value),
        }
    }
}

impl<T: 'static> AutoGenerator<T> for VersionGenerator<T> {
    fn strategy(&self) -> GenerateStrategy {
        GenerateStrategy::Always
    }

    fn generate(&self, current: Option<&T>) -> T {
        VersionGenerator::generate(self, current)
    }
}

impl<T: 'static> Clone for VersionGenerator<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            sequence: self.sequence,
        }
    }
}

impl<T: 'static> fmt::Debug for VersionGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionGenerator")
            .field("kind", &self.kind)
            .finish()
    }
}
