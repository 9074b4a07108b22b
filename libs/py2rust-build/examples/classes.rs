//! Mapping Python dicts, tuples and object attributes onto user structs.
//!
//! A `Point` builds from `{'x': ..., 'y': ...}` or from an object carrying
//! `x`/`y` attributes; a `Path` builds from a tuple holding a single list
//! of points.

use std::fmt;

use config::constants::FLOAT_DISPLAY_PRECISION;
use py2rust_build::{build, build_str, BuildError, DictMapper, FromPy, PyValue, TupleMapper};

#[derive(Default, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn mapper() -> DictMapper<Point> {
        DictMapper::new()
            .field("x", |p: &mut Point, v: f64| p.x = v)
            .field("y", |p: &mut Point, v: f64| p.y = v)
    }

    fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl FromPy for Point {
    fn eligible(value: &PyValue) -> bool {
        Point::mapper().eligible(value)
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        Point::mapper().build(value)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[derive(Default)]
struct Path {
    points: Vec<Point>,
}

impl Path {
    fn mapper() -> TupleMapper<Path> {
        TupleMapper::new().slot(|path: &mut Path, points: Vec<Point>| path.points = points)
    }

    fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}

impl FromPy for Path {
    fn eligible(value: &PyValue) -> bool {
        Path::mapper().eligible(value)
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        Path::mapper().build(value)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

fn distance(left: &PyValue, right: &PyValue) -> Result<(), BuildError> {
    let p1: Point = build(left)?;
    let p2: Point = build(right)?;
    println!(
        "distance({p1},{p2}) = {:.*}",
        FLOAT_DISPLAY_PRECISION,
        p1.distance(&p2)
    );
    Ok(())
}

fn length(source: &str) -> Result<(), BuildError> {
    let path: Path = build_str(source)?;
    println!(
        "length({path}) = {:.*}",
        FLOAT_DISPLAY_PRECISION,
        path.length()
    );
    Ok(())
}

fn main() -> Result<(), BuildError> {
    // Based on Python structs
    let p1 = build_str::<PyValue>("{'x': 0, 'y': 2}")?;
    let p2 = build_str::<PyValue>("{'x': 1, 'y': 3}")?;
    distance(&p1, &p2)?;
    length("([{'x': 0, 'y': 2}, {'x': 1, 'y': 3}, {'x': 0, 'y': 2}],)")?;

    // Based on Python classes: objects carrying x/y attributes
    let origin = PyValue::object("Point", vec![("x", PyValue::int(0)), ("y", PyValue::int(0))]);
    let target = PyValue::object("Point", vec![("x", PyValue::int(5)), ("y", PyValue::int(1))]);
    distance(&origin, &target)?;

    Ok(())
}
