use fondue_core::to_macro_case;
use serde::Deserialize;

/// Library metadata configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Library {
    /// Name of the library
    pub name: String,

    /// Build guard macro gating implementation bodies
    pub guard: Option<String>,

    /// Include prefix marking the library's own headers
    pub include_prefix: Option<String>,

    /// License/attribution comment placed at the top of the artifact
    pub banner: Option<String>,
}

impl Library {
    /// The guard macro, derived from the name when not set explicitly
    pub fn guard_macro(&self) -> String {
        match &self.guard {
            Some(guard) => guard.clone(),
            None => format!("{}_IMPLEMENTATION", to_macro_case(&self.name)),
        }
    }

    /// The prefix identifying local includes (`#include <prefix/...>`)
    pub fn local_prefix(&self) -> &str {
        self.include_prefix.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(name: &str) -> Library {
        Library {
            name: name.to_string(),
            guard: None,
            include_prefix: None,
            banner: None,
        }
    }

    #[test]
    fn test_guard_macro_derived_from_name() {
        assert_eq!(library("optionpp").guard_macro(), "OPTIONPP_IMPLEMENTATION");
        assert_eq!(library("my-lib").guard_macro(), "MY_LIB_IMPLEMENTATION");
    }

    #[test]
    fn test_guard_macro_explicit() {
        let mut lib = library("optionpp");
        lib.guard = Some("OPTIONPP_MAIN".to_string());
        assert_eq!(lib.guard_macro(), "OPTIONPP_MAIN");
    }

    #[test]
    fn test_local_prefix_defaults_to_name() {
        assert_eq!(library("optionpp").local_prefix(), "optionpp");

        let mut lib = library("optionpp");
        lib.include_prefix = Some("opp".to_string());
        assert_eq!(lib.local_prefix(), "opp");
    }
}
