use rand::Rng;

/// Position of a sequence entry in the (verb, tense) grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceEntry {
    pub verb_index: usize,
    pub tense_index: usize,
}

/// Splits one drawn index into a verb and a tense.
///
/// Both coordinates come from the same draw, so tenses are only uniform when
/// the draw range is an exact multiple of `dictionary_size`.
#[must_use]
pub fn decode_index(index: usize, dictionary_size: usize) -> SequenceEntry {
    SequenceEntry {
        verb_index: index % dictionary_size,
        tense_index: index / dictionary_size,
    }
}

/// Draws `length` indices in `[0, dictionary_size * tense_count)`.
///
/// Returns an empty sequence when the grid is empty.
pub fn build_sequence<R: Rng + ?Sized>(
    dictionary_size: usize,
    tense_count: usize,
    length: usize,
    rng: &mut R,
) -> Vec<usize> {
    let range = dictionary_size.saturating_mul(tense_count);
    if range == 0 {
        return Vec::new();
    }
    (0..length).map(|_| rng.random_range(0..range)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn decode_splits_verb_and_tense() {
        assert_eq!(
            decode_index(230, 50),
            SequenceEntry {
                verb_index: 30,
                tense_index: 4
            }
        );
        assert_eq!(
            decode_index(49, 50),
            SequenceEntry {
                verb_index: 49,
                tense_index: 0
            }
        );
    }

    #[test]
    fn indices_stay_inside_the_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let sequence = build_sequence(7, 6, 500, &mut rng);
        assert_eq!(sequence.len(), 500);
        for index in sequence {
            assert!(index < 42);
            let entry = decode_index(index, 7);
            assert!(entry.verb_index < 7);
            assert!(entry.tense_index < 6);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = build_sequence(50, 6, 20, &mut StdRng::seed_from_u64(3));
        let b = build_sequence(50, 6, 20, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_grid_yields_empty_sequence() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_sequence(0, 6, 10, &mut rng).is_empty());
        assert!(build_sequence(10, 0, 10, &mut rng).is_empty());
    }
}
