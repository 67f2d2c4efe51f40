//! Walk an array through growth and shrink, then run a few divisions.
//!
//! Run with `cargo run -p unsorted --example demo`.

use std::error::Error;

use unsorted::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let mut array = DynamicArray::new(4)?;
    for v in 0..9 {
        array.add(v)?;
        println!("add {v:>2}: len {:>2}, capacity {:>2}", array.len(), array.capacity());
    }
    println!("contents: {array}");

    for v in [0, 3, 8, 1, 2, 4, 5] {
        array.delete(&v)?;
        println!(
            "delete {v}: {array} (len {}, capacity {})",
            array.len(),
            array.capacity()
        );
    }

    let stats = array.resize_stats();
    println!(
        "resizes: {} growth, {} shrink, peak capacity {}",
        stats.growth_events, stats.shrink_events, stats.peak_capacity
    );

    for (a, b) in [(1, 2), (2, 2), (972, 5)] {
        println!("{a}/{b}={}", divide(a, b)?);
    }
    Ok(())
}
