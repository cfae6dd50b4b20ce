//! Entity trait: identity + continuity across state changes.

use std::collections::HashSet;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns the first identifier that occurs more than once, if any.
pub fn find_duplicate_id<'a, E, I>(entities: I) -> Option<&'a E::Id>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    entities.into_iter().map(Entity::id).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Line {
        id: u32,
    }

    impl Entity for Line {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn no_duplicates_in_distinct_ids() {
        let lines = [Line { id: 1 }, Line { id: 2 }, Line { id: 3 }];
        assert_eq!(find_duplicate_id(&lines), None);
    }

    #[test]
    fn reports_first_repeated_id() {
        let lines = [Line { id: 1 }, Line { id: 2 }, Line { id: 1 }, Line { id: 2 }];
        assert_eq!(find_duplicate_id(&lines), Some(&1));
    }

    #[test]
    fn empty_collection_has_no_duplicates() {
        let lines: Vec<Line> = vec![];
        assert_eq!(find_duplicate_id(&lines), None);
    }
}
