use std::cmp::Reverse;

use bp_types::Blueprint;

/// Size of the "top by point count" derived view.
pub const TOP_N: usize = 5;

/// Compute the top-[`TOP_N`] blueprints by point count over the given lists.
///
/// The union is taken in the order the lists (and their entries) are given;
/// the sort is stable, so ties keep that encounter order. This is a pure
/// projection over already-loaded data, not a fetch.
pub fn top_by_points<'a, I>(lists: I) -> Vec<Blueprint>
where
    I: IntoIterator<Item = &'a [Blueprint]>,
{
    let mut union: Vec<Blueprint> = lists.into_iter().flatten().cloned().collect();
    union.sort_by_key(|bp| Reverse(bp.point_count()));
    union.truncate(TOP_N);
    union
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_types::Point;

    fn bp(name: &str, n: usize) -> Blueprint {
        Blueprint::new("author", name, vec![Point::default(); n])
    }

    #[test]
    fn sorts_descending_with_stable_ties() {
        let list: Vec<Blueprint> = [("a", 4), ("b", 3), ("c", 8), ("d", 8), ("e", 1)]
            .into_iter()
            .map(|(name, n)| bp(name, n))
            .collect();
        let top = top_by_points([list.as_slice()]);
        let names: Vec<&str> = top.iter().map(|bp| bp.name.as_str()).collect();
        // Both count-8 entries first, original relative order preserved
        assert_eq!(names, vec!["c", "d", "a", "b", "e"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let list: Vec<Blueprint> = (0..10).map(|i| bp(&format!("bp{i}"), i)).collect();
        let top = top_by_points([list.as_slice()]);
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].point_count(), 9);
        assert_eq!(top[4].point_count(), 5);
    }

    #[test]
    fn unions_multiple_lists_in_given_order() {
        let first = vec![bp("x", 2)];
        let second = vec![bp("y", 2), bp("z", 7)];
        let top = top_by_points([first.as_slice(), second.as_slice()]);
        let names: Vec<&str> = top.iter().map(|bp| bp.name.as_str()).collect();
        assert_eq!(names, vec!["z", "x", "y"]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(top_by_points(std::iter::empty::<&[Blueprint]>()).is_empty());
    }
}
