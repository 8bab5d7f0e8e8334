//! Find the nearest stored point to a query point.
use kdtree2d::prelude::*;

fn main() -> Result<(), Error> {
    let mut tree = KdTree::with_capacity(3);
    tree.insert(Point::new(0.5, 0.5))?;
    tree.insert(Point::new(0.25, 0.25))?;
    tree.insert(Point::new(0.75, 0.75))?;

    let query = Point::new(0.6, 0.6);
    if let Some(point) = tree.nearest(query)? {
        println!("Nearest point to {}: {}", query, point);
    }

    for point in tree.nearest_k(query, 2)? {
        println!("  {} at distance {:.4}", point, point.distance_to(query));
    }
    Ok(())
}
