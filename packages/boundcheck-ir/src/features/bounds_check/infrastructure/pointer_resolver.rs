//! Pointer resolution
//!
//! Maps a pointer variable, under an invariant, to `Unknown` or a non-empty
//! set of allocation candidates, each paired with its shadow size variable.

use tracing::warn;

use crate::shared::models::VarName;

use super::super::domain::{AllocationCandidate, CandidateSet, PointerResolution};
use super::super::ports::{AddressDomain, PointsTo, ShadowSizes};

#[derive(Debug, Clone)]
pub struct PointerResolver<S> {
    shadow_sizes: S,
}

impl<S: ShadowSizes> PointerResolver<S> {
    pub fn new(shadow_sizes: S) -> Self {
        Self { shadow_sizes }
    }

    pub fn shadow_sizes(&self) -> &S {
        &self.shadow_sizes
    }

    pub fn resolve<I: AddressDomain>(&self, invariant: &I, pointer: &VarName) -> PointerResolution {
        let addresses = match invariant.points_to(pointer) {
            PointsTo::Unknown => return PointerResolution::Unknown,
            PointsTo::Addresses(addresses) => addresses,
        };

        let candidates = addresses.into_iter().map(|address| {
            let size = self.shadow_sizes.shadow_size(&address);
            AllocationCandidate { address, size }
        });

        match CandidateSet::new(candidates) {
            Some(set) => PointerResolution::Candidates(set),
            None => {
                warn!(
                    pointer = %pointer,
                    "points-to set is known but empty, treating pointer as unknown"
                );
                PointerResolution::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::bounds_check::infrastructure::ShadowSizeNaming;
    use std::collections::HashMap;

    struct Facts(HashMap<&'static str, PointsTo>);

    impl AddressDomain for Facts {
        fn points_to(&self, pointer: &VarName) -> PointsTo {
            self.0
                .get(pointer.as_str())
                .cloned()
                .unwrap_or(PointsTo::Unknown)
        }
    }

    fn resolver() -> PointerResolver<ShadowSizeNaming> {
        PointerResolver::new(ShadowSizeNaming::default())
    }

    #[test]
    fn test_unknown_pointer() {
        let facts = Facts(HashMap::new());
        assert!(resolver().resolve(&facts, &VarName::new("p")).is_unknown());
    }

    #[test]
    fn test_empty_known_set_degrades_to_unknown() {
        let facts = Facts(HashMap::from([("p", PointsTo::Addresses(Vec::new()))]));
        assert_eq!(
            resolver().resolve(&facts, &VarName::new("p")),
            PointerResolution::Unknown
        );
    }

    #[test]
    fn test_candidates_carry_shadow_sizes() {
        let facts = Facts(HashMap::from([(
            "p",
            PointsTo::Addresses(vec![VarName::new("b"), VarName::new("a")]),
        )]));

        let resolution = resolver().resolve(&facts, &VarName::new("p"));
        let set = resolution.candidates().unwrap();
        let pairs: Vec<(&str, &str)> = set
            .iter()
            .map(|c| (c.address.as_str(), c.size.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![("a", "shadow.size.a"), ("b", "shadow.size.b")]
        );
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let facts = Facts(HashMap::from([(
            "q",
            PointsTo::Addresses(vec![VarName::new("x")]),
        )]));
        let q = VarName::new("q");
        assert_eq!(resolver().resolve(&facts, &q), resolver().resolve(&facts, &q));
    }
}
