use alphanum::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

const ALPHABET: &[u8] = b"aAbZ019-+ .";

fn random_key(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..10);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[test]
fn test_unpadded_numbers_match_numeric_order() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..50 {
        let count = rng.random_range(0..200);
        let numbers: Vec<u128> = (0..count)
            .map(|_| u128::from(rng.random::<u64>()) * rng.random_range(1..1000u128))
            .collect();
        let input: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();

        let sorted = natural_sort(input, &SortOptions::default());

        let mut expected = numbers.clone();
        expected.sort();
        let expected: Vec<String> = expected.iter().map(|n| n.to_string()).collect();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn test_signed_numbers_match_numeric_order() {
    let mut rng = StdRng::seed_from_u64(7);

    for _iter in 0..50 {
        let count = rng.random_range(0..200);
        let mut numbers: Vec<i64> = (0..count).map(|_| rng.random()).collect();

        let sorted = natural_sort(numbers.clone(), &SortOptions::new().with_sign(true));

        numbers.sort();
        assert_eq!(sorted, numbers);
    }
}

#[test]
fn test_embedded_numbers_match_numeric_order() {
    let mut rng = StdRng::seed_from_u64(1234);
    let count = 5_000;

    let numbers: Vec<u32> = (0..count).map(|_| rng.random_range(0..100_000)).collect();
    let input: Vec<String> = numbers.iter().map(|n| format!("frame_{}.exr", n)).collect();

    let indices = natural_sort_indices(&input, &SortOptions::default());

    for window in indices.windows(2) {
        assert!(numbers[window[0]] <= numbers[window[1]]);
        if numbers[window[0]] == numbers[window[1]] {
            // Stability: equal keys keep input order.
            assert!(window[0] < window[1]);
        }
    }
}

#[test]
fn test_random_keys_sorted_and_permuted() {
    let mut rng = StdRng::seed_from_u64(99);

    for _iter in 0..200 {
        let count = rng.random_range(0..40);
        let input: Vec<String> = (0..count).map(|_| random_key(&mut rng)).collect();

        for sign in [false, true] {
            for insensitive in [false, true] {
                let options = SortOptions::new()
                    .with_sign(sign)
                    .with_insensitive(insensitive);
                let comparator = NaturalComparator::new(&options);

                let sorted = natural_sort(input.clone(), &options);

                for pair in sorted.windows(2) {
                    assert_ne!(
                        comparator.compare(&pair[0], &pair[1]),
                        Ordering::Greater,
                        "{:?} sorted before {:?}",
                        pair[0],
                        pair[1]
                    );
                }

                let mut expected = input.clone();
                expected.sort();
                let mut actual = sorted.clone();
                actual.sort();
                assert_eq!(actual, expected);
            }
        }
    }
}

#[test]
fn test_random_keys_agree_with_std_sort() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _iter in 0..200 {
        let count = rng.random_range(0..60);
        let input: Vec<String> = (0..count).map(|_| random_key(&mut rng)).collect();
        let options = SortOptions::new().with_sign(rng.random());
        let comparator = NaturalComparator::new(&options);

        let sorted = natural_sort(input.clone(), &options);

        // Both sorts are stable over the same comparator.
        let mut expected = input;
        expected.sort_by(|a, b| comparator.compare(a, b));
        assert_eq!(sorted, expected);
    }
}

#[test]
fn test_long_digit_runs() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut input: Vec<String> = (0..500)
        .map(|_| {
            let len = rng.random_range(1..60);
            let mut digits: String = (0..len)
                .map(|_| char::from(b'0' + rng.random_range(0..10)))
                .collect();
            if digits.starts_with('0') {
                digits.replace_range(0..1, "1");
            }
            digits
        })
        .collect();

    let sorted = natural_sort(input.clone(), &SortOptions::default());

    // Without padding, longer runs are larger.
    input.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    assert_eq!(sorted, input);
}
