use crate::error::VersionError;
use crate::sequence::{
    BigIntSequence, Int16Sequence, Int32Sequence, Int64Sequence, Int8Sequence, Sequence,
};
use crate::types::{ScalarKind, TypeDescriptor};
use num_bigint::BigInt;
use std::any::{type_name, Any};
use tracing::{debug, warn};

static BIG_INT: &dyn Sequence<BigInt> = &BigIntSequence;
static INT8: &dyn Sequence<i8> = &Int8Sequence;
static INT32: &dyn Sequence<i32> = &Int32Sequence;
static INT64: &dyn Sequence<i64> = &Int64Sequence;
static INT16: &dyn Sequence<i16> = &Int16Sequence;

static REGISTRY: SequenceRegistry = SequenceRegistry {
    entries: &[
        Entry {
            kind: ScalarKind::BigInt,
            sequence: &BIG_INT,
        },
        Entry {
            kind: ScalarKind::Int8,
            sequence: &INT8,
        },
        Entry {
            kind: ScalarKind::Int32,
            sequence: &INT32,
        },
        Entry {
            kind: ScalarKind::Int64,
            sequence: &INT64,
        },
        Entry {
            kind: ScalarKind::Int16,
            sequence: &INT16,
        },
    ],
};

struct Entry {
    kind: ScalarKind,
    // always a `&'static dyn Sequence<T>` for the kind's representation type
    sequence: &'static (dyn Any + Send + Sync),
}

/// Fixed table of version sequences, one per [`ScalarKind`], in declaration
/// order. Immutable and shared by every generator in the process.
pub struct SequenceRegistry {
    entries: &'static [Entry],
}

impl SequenceRegistry {
    pub fn global() -> &'static SequenceRegistry {
        &REGISTRY
    }

    pub fn kinds(&self) -> impl Iterator<Item = ScalarKind> + '_ {
        self.entries.iter().map(|entry| entry.kind)
    }

    pub fn lookup(&self, descriptor: &TypeDescriptor) -> Result<ScalarKind, VersionError> {
        self.entry(descriptor).map(|entry| entry.kind)
    }

    /// Resolves the typed sequence for values of `T` declared as `descriptor`.
    ///
    /// Fails when no kind matches, and also when the matching kind is carried
    /// by a type other than `T`; the error then names both, e.g. `int as i64`.
    pub fn sequence<T: 'static>(
        &self,
        descriptor: &TypeDescriptor,
    ) -> Result<&'static dyn Sequence<T>, VersionError> {
        let entry = self.entry(descriptor)?;
        match entry.sequence.downcast_ref::<&'static dyn Sequence<T>>() {
            Some(sequence) => {
                debug!(kind = %entry.kind, requested = %descriptor, "bound version sequence");
                Ok(*sequence)
            }
            None => {
                warn!(
                    kind = %entry.kind,
                    requested = %descriptor,
                    carrier = type_name::<T>(),
                    "version type carried by the wrong value type"
                );
                Err(VersionError::UnsupportedVersionType {
                    requested: format!("{descriptor} as {}", type_name::<T>()),
                    supported: self.kinds().collect(),
                })
            }
        }
    }

    fn entry(&self, descriptor: &TypeDescriptor) -> Result<&Entry, VersionError> {
        self.entries
            .iter()
            .find(|entry| entry.kind.is(descriptor))
            .ok_or_else(|| self.unsupported(descriptor))
    }

    fn unsupported(&self, descriptor: &TypeDescriptor) -> VersionError {
        warn!(requested = %descriptor, "rejected version type");
        VersionError::UnsupportedVersionType {
            requested: descriptor.to_string(),
            supported: self.kinds().collect(),
        }
    }
}
