use super::MathFunction;
use super::definitions::{ALL_DEFINITIONS, FunctionDefinition};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Static registry mapping formula names to function definitions
static REGISTRY: OnceLock<FxHashMap<&'static str, &'static FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, &'static FunctionDefinition> {
    let mut map = FxHashMap::default();
    for def in ALL_DEFINITIONS {
        map.insert(def.name, def);
    }
    map
}

/// Central registry for resolving function names and dispatching evaluation
///
/// Built once on first use and never mutated afterwards.
pub(crate) struct Registry;

impl Registry {
    /// Look up a definition by formula name, case-insensitively
    pub(crate) fn get(name: &str) -> Option<&'static FunctionDefinition> {
        let map = REGISTRY.get_or_init(init_registry);
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            map.get(name.to_ascii_lowercase().as_str()).copied()
        } else {
            map.get(name).copied()
        }
    }

    /// Get the definition for an already-resolved function tag
    pub(crate) fn definition(function: MathFunction) -> &'static FunctionDefinition {
        ALL_DEFINITIONS
            .iter()
            .find(|def| def.function == function)
            .expect("every MathFunction variant has a definition")
    }

    /// Length of the longest registered name, for longest-match lexing
    pub(crate) fn max_name_len() -> usize {
        ALL_DEFINITIONS
            .iter()
            .map(|def| def.name.len())
            .max()
            .unwrap_or(0)
    }
}
