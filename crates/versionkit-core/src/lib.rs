pub mod error;
pub mod generator;
pub mod registry;
pub mod sequence;
pub mod types;

pub use error::VersionError;
pub use generator::{AutoGenerator, GenerateStrategy, VersionGenerator};
pub use num_bigint::BigInt;
pub use registry::SequenceRegistry;
pub use sequence::{
    BigIntSequence, Int16Sequence, Int32Sequence, Int64Sequence, Int8Sequence, Sequence,
};
pub use types::{ScalarKind, TypeDescriptor};
