//! Extracting containers: scalar products of lists, distances between
//! point dicts, and powers from (base, exponent) tuples.

use std::collections::BTreeMap;

use config::constants::FLOAT_DISPLAY_PRECISION;
use py2rust_build::{build_str, BuildError, PyValue};

fn scalar(left: &str, right: &str) -> Result<(), BuildError> {
    let v1: Vec<i32> = build_str(left)?;
    let v2: Vec<i32> = build_str(right)?;
    if v1.len() != v2.len() {
        println!("scalar: sizes differ");
        return Ok(());
    }
    let value: i32 = v1.iter().zip(&v2).map(|(a, b)| a * b).sum();
    println!("scalar({v1:?},{v2:?}) = {value}");
    Ok(())
}

fn distance(left: &str, right: &str) -> Result<(), BuildError> {
    let p1: BTreeMap<String, f64> = build_str(left)?;
    let p2: BTreeMap<String, f64> = build_str(right)?;
    let dx = p1["x"] - p2["x"];
    let dy = p1["y"] - p2["y"];
    println!(
        "distance({p1:?},{p2:?}) = {:.*}",
        FLOAT_DISPLAY_PRECISION,
        (dx * dx + dy * dy).sqrt()
    );
    Ok(())
}

/// Accepts either a single (base, exponent) tuple or a list of them.
fn power(source: &str) -> Result<(), BuildError> {
    let value: PyValue = build_str(source)?;
    let pairs: Vec<(f64, i32)> = match &value {
        PyValue::List(_) => py2rust_build::build(&value)?,
        _ => vec![py2rust_build::build(&value)?],
    };
    for (base, exponent) in pairs {
        println!(
            "power({base},{exponent}) = {:.*}",
            FLOAT_DISPLAY_PRECISION,
            base.powi(exponent)
        );
    }
    Ok(())
}

fn main() -> Result<(), BuildError> {
    scalar("[1, 2, 3]", "[4, 5, 6]")?;
    scalar("[1, 2]", "[4, 5, 6]")?;

    distance("{'x': 0, 'y': 2}", "{'x': 1, 'y': 3}")?;

    power("(2.0, 10)")?;
    power("[(2.0, 3), (1.5, 2), (10.0, -1)]")?;

    Ok(())
}
