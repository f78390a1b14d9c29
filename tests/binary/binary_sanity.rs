use approx::assert_abs_diff_eq;
use bitmeasure::Error;
use bitmeasure::estimators::approaches::binary::{
    BinaryDataset, calculate_probabilities, information_content, shannon_entropy,
};

#[test]
fn empty_sequence_is_an_error() {
    assert!(matches!(
        calculate_probabilities(""),
        Err(Error::EmptySequence)
    ));
    assert!(matches!(information_content(""), Err(Error::EmptySequence)));
    assert!(matches!(shannon_entropy(""), Err(Error::EmptySequence)));
}

#[test]
fn foreign_symbols_are_rejected() {
    assert!(matches!(
        calculate_probabilities("0102"),
        Err(Error::InvalidSymbol('2'))
    ));
    assert!(matches!(
        shannon_entropy("01 01"),
        Err(Error::InvalidSymbol(' '))
    ));
}

#[test]
fn all_zero_sequence() {
    let dist = calculate_probabilities("0000").unwrap();
    assert_eq!(dist.zero, 1.0);
    assert_eq!(dist.one, 0.0);

    // The unobserved symbol maps to 0.0 information, not infinity.
    let info = information_content("0000").unwrap();
    assert_eq!(info.zero, 0.0);
    assert_eq!(info.one, 0.0);
}

#[test]
fn single_repeated_symbol_has_zero_entropy() {
    for bits in ["0", "1", "000", "1111111111"] {
        assert_eq!(shannon_entropy(bits).unwrap(), 0.0);
    }
}

#[test]
fn balanced_sequence_has_unit_entropy() {
    for bits in ["01", "0101", "110100", "0000000011111111"] {
        assert_abs_diff_eq!(shannon_entropy(bits).unwrap(), 1.0, epsilon = 1e-15);
    }
}

#[test]
fn probabilities_sum_to_one() {
    for bits in ["0", "1", "01", "0010", "111101", "000000001"] {
        let dist = calculate_probabilities(bits).unwrap();
        assert_abs_diff_eq!(dist.zero + dist.one, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn known_skewed_sequence() {
    // "0010": p0 = 3/4, p1 = 1/4
    let dist = calculate_probabilities("0010").unwrap();
    assert_eq!(dist.zero, 0.75);
    assert_eq!(dist.one, 0.25);

    let info = information_content("0010").unwrap();
    assert_abs_diff_eq!(info.zero, -(0.75f64.log2()), epsilon = 1e-15);
    assert_abs_diff_eq!(info.one, 2.0, epsilon = 1e-15);

    let expected_h = 2.0 - 0.75 * 3.0f64.log2();
    assert_abs_diff_eq!(shannon_entropy("0010").unwrap(), expected_h, epsilon = 1e-12);
}

#[test]
fn dataset_caches_counts() {
    let dataset = BinaryDataset::from_bits("110100").unwrap();
    assert_eq!(dataset.zeros, 3);
    assert_eq!(dataset.ones, 3);
    assert_eq!(dataset.n, 6);
    assert_abs_diff_eq!(dataset.dist.zero, 0.5, epsilon = 1e-15);
}

#[test]
fn mapping_display_format() {
    let dist = calculate_probabilities("01").unwrap();
    assert_eq!(dist.to_string(), "{'0': 0.5, '1': 0.5}");

    let info = information_content("01").unwrap();
    assert_eq!(info.to_string(), "{'0': 1, '1': 1}");
}
