//! Find all points inside a rectangle, with explicit tree bounds.
use kdtree2d::prelude::*;

fn main() -> Result<(), Error> {
    let mut tree = KdTree::with_bounds(Rect::new(0.0, 0.0, 100.0, 100.0))?;
    for &(x, y) in &[(10.0, 10.0), (20.0, 80.0), (55.0, 45.0), (60.0, 60.0), (90.0, 5.0)] {
        tree.insert(Point::new(x, y))?;
    }

    let rect = Rect::new(40.0, 40.0, 60.0, 60.0);
    let found = tree.range(rect)?;
    println!("Found {} points in {}: {:?}", found.len(), rect, found);

    match tree.insert(Point::new(150.0, 50.0)) {
        Ok(_) => println!("Unexpectedly accepted a point outside the bounds"),
        Err(e) => println!("Rejected: {}", e),
    }
    Ok(())
}
