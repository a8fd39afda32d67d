use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first occurrence of every item, preserving order.
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_repeated_names() {
        let names = [
            "Zara", "Sadia", "Mahin", "Adnan", "Mahin", "Maisha", "Adnan", "Faiyaz",
        ];
        assert_eq!(
            remove_duplicates(&names),
            vec!["Zara", "Sadia", "Mahin", "Adnan", "Maisha", "Faiyaz"]
        );
    }

    #[test]
    fn empty_stays_empty() {
        let empty: [i64; 0] = [];
        assert!(remove_duplicates(&empty).is_empty());
    }
}
