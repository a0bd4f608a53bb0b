use std::cell::Cell;

use spanroute_core::{Edge, Graph};

/// Grid coordinate used as a caller-defined vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

/// Passage between two neighbouring grid points whose weight the caller can
/// reassign between queries.
#[derive(Debug, PartialEq)]
pub struct Passage {
    ends: (Point, Point),
    weight: Cell<f64>,
}

impl Passage {
    pub fn set_weight(&self, weight: f64) {
        self.weight.set(weight);
    }
}

impl Edge for Passage {
    type Vertex = Point;

    fn weight(&self) -> f64 {
        self.weight.get()
    }

    fn vertex1(&self) -> &Point {
        &self.ends.0
    }

    fn vertex2(&self) -> &Point {
        &self.ends.1
    }
}

/// Builds a `width` by `height` grid where every passage has weight 1.
#[must_use]
pub fn grid(width: u16, height: u16) -> Graph<Point, Passage> {
    let points: Vec<Point> = (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .collect();
    let mut passages = Vec::new();
    for point in &points {
        let right = Point { x: point.x + 1, y: point.y };
        let down = Point { x: point.x, y: point.y + 1 };
        if right.x < width {
            passages.push(Passage {
                ends: (*point, right),
                weight: Cell::new(1.0),
            });
        }
        if down.y < height {
            passages.push(Passage {
                ends: (*point, down),
                weight: Cell::new(1.0),
            });
        }
    }
    Graph::new(points, passages).expect("grid is a valid graph")
}
