//! The prelude alone is enough to drive both sub-crates.

use unsorted::prelude::*;

#[test]
fn prelude_covers_array_and_division() {
    let mut array = DynamicArray::with_config(&ArrayConfig::new(2)).unwrap();
    for a in [1u32, 2, 972] {
        array.add(a).unwrap();
    }
    let quotients: Vec<u32> = array.iter().map(|&a| divide(a, 2).unwrap()).collect();
    assert_eq!(quotients, vec![0, 1, 486]);
    assert_eq!(
        array.resize_stats(),
        ResizeStats {
            growth_events: 1,
            shrink_events: 0,
            peak_capacity: 4,
        }
    );
}

#[test]
fn errors_share_the_std_error_trait() {
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(DynamicArray::<u8>::new(0).unwrap_err()),
        Box::new(divide(1, 0).unwrap_err()),
    ];
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec!["invalid capacity 0: must be at least 1", "cannot divide 1 by zero"]
    );
}
