//! Show how insertion order shapes the tree.
use kdtree2d::prelude::*;

fn main() -> Result<(), Error> {
    let n = 1_000;
    let mut sorted = KdTree::with_capacity(n);
    let mut interleaved = KdTree::with_capacity(n);

    for i in 0..n {
        let v = i as f64 / n as f64;
        sorted.insert(Point::new(v, v))?;
    }

    // Bit-reversed order spreads consecutive inserts across the domain
    let bits = usize::BITS - (n - 1).leading_zeros();
    for i in 0..(1usize << bits) {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j < n {
            let v = j as f64 / n as f64;
            interleaved.insert(Point::new(v, v))?;
        }
    }

    println!("sorted insertion:      {} points, height {}", sorted.len(), sorted.height());
    println!("interleaved insertion: {} points, height {}", interleaved.len(), interleaved.height());
    Ok(())
}
