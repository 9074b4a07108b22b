//! Extracting primitive values from Python literal source.

use py2rust_build::{build_str, BuildError};

fn read_boolean(source: &str) -> Result<(), BuildError> {
    let flag: bool = build_str(source)?;
    println!("read_boolean: {flag}");
    Ok(())
}

fn main() -> Result<(), BuildError> {
    read_boolean("True")?;
    read_boolean("False")?;

    let count: u32 = build_str("42")?;
    println!("count: {count}");

    let offset: i64 = build_str("-50")?;
    println!("offset: {offset}");

    let ratio: f64 = build_str("0.25")?;
    println!("ratio: {ratio}");

    let label: String = build_str("'measurement'")?;
    println!("label: {label}");

    let maybe: Option<i32> = build_str("None")?;
    println!("maybe: {maybe:?}");

    // Out-of-range and mistyped inputs fail loudly instead of truncating.
    if let Err(err) = build_str::<u8>("1000") {
        println!("u8 from 1000: {err}");
    }
    if let Err(err) = build_str::<bool>("1") {
        println!("bool from 1: {err}");
    }

    Ok(())
}
