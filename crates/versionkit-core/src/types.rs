use num_bigint::BigInt;
use std::any::{type_name, TypeId};
use std::fmt;

/// Numeric representations that can hold a version value.
///
/// Kinds are mutually exclusive: a [`TypeDescriptor`] matches at most one of
/// them. `ALL` fixes the declaration order used for lookups and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    BigInt,
    Int8,
    Int32,
    Int64,
    Int16,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 5] = [
        ScalarKind::BigInt,
        ScalarKind::Int8,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Int16,
    ];

    /// Schema and config spellings accepted by [`TypeDescriptor::named`].
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ScalarKind::BigInt => &["bigint", "biginteger", "big_integer"],
            ScalarKind::Int8 => &["i8", "int8", "byte", "tinyint"],
            ScalarKind::Int32 => &["i32", "int32", "int", "integer"],
            ScalarKind::Int64 => &["i64", "int64", "long"],
            ScalarKind::Int16 => &["i16", "int16", "short", "smallint"],
        }
    }

    /// Identity of the Rust type that carries values of this kind.
    pub fn rust_type(self) -> TypeId {
        match self {
            ScalarKind::BigInt => TypeId::of::<BigInt>(),
            ScalarKind::Int8 => TypeId::of::<i8>(),
            ScalarKind::Int32 => TypeId::of::<i32>(),
            ScalarKind::Int64 => TypeId::of::<i64>(),
            ScalarKind::Int16 => TypeId::of::<i16>(),
        }
    }

    pub fn is(self, descriptor: &TypeDescriptor) -> bool {
        match descriptor {
            TypeDescriptor::Rust { id, .. } => *id == self.rust_type(),
            TypeDescriptor::Named(name) => self
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name.trim())),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::BigInt => "BigInt",
            ScalarKind::Int8 => "i8",
            ScalarKind::Int32 => "i32",
            ScalarKind::Int64 => "i64",
            ScalarKind::Int16 => "i16",
        };
        f.write_str(name)
    }
}

/// Describes the declared type of a version field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A concrete Rust type, compared by `TypeId`.
    Rust { name: &'static str, id: TypeId },
    /// A type name taken from a schema or config file.
    Named(String),
}

impl TypeDescriptor {
    pub fn of<T: 'static>() -> Self {
        TypeDescriptor::Rust {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Rust { name, .. } => name,
            TypeDescriptor::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{ScalarKind, TypeDescriptor};

    #[test]
    fn each_alias_matches_exactly_one_kind() {
        for kind in ScalarKind::ALL {
            for alias in kind.aliases() {
                let descriptor = TypeDescriptor::named(*alias);
                let matches: Vec<ScalarKind> = ScalarKind::ALL
                    .into_iter()
                    .filter(|k| k.is(&descriptor))
                    .collect();
                assert_eq!(matches, vec![kind], "alias {alias}");
            }
        }
    }

    #[test]
    fn named_lookup_ignores_case_and_padding() {
        assert!(ScalarKind::Int64.is(&TypeDescriptor::named(" LONG ")));
        assert!(ScalarKind::BigInt.is(&TypeDescriptor::named("BigInteger")));
        assert!(!ScalarKind::Int64.is(&TypeDescriptor::named("bigint")));
    }

    #[test]
    fn rust_descriptor_matches_by_type() {
        assert!(ScalarKind::Int16.is(&TypeDescriptor::of::<i16>()));
        assert!(!ScalarKind::Int16.is(&TypeDescriptor::of::<u16>()));
        assert_eq!(TypeDescriptor::of::<i32>().to_string(), "i32");
    }
}
