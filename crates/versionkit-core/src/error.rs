use crate::types::ScalarKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("type [{requested}] is not supported; allowed only {}", kind_list(.supported))]
    UnsupportedVersionType {
        requested: String,
        supported: Vec<ScalarKind>,
    },
}

fn kind_list(kinds: &[ScalarKind]) -> String {
    let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(", "))
}
