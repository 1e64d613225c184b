//! Build a small 3-D array in pieces, sort it, and consolidate it
//!
//! Run with `RUST_LOG=spsparse=debug` to see the library's events.

use spsparse::{
    consolidate, merge_into, raise, ConsolidateConfig, CooArray, DenseArray, DuplicatePolicy,
    SortOrder,
};
use tracing_subscriber::EnvFilter;

fn main() -> spsparse::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let shape = [3, 4, 2];
    let mut a = CooArray::<i32, f64, 3>::new(shape)?;
    let mut part = CooArray::<i32, f64, 3>::new(shape)?;
    for k in 0..12 {
        let index = [k % 3, (k * 5) % 4, k % 2];
        if k % 2 == 0 {
            a.add(index, f64::from(k))?;
        } else {
            part.add(index, -f64::from(k))?;
        }
    }
    a.append(&part)?;
    println!("input:\n{a}");

    // Last dimension most significant
    let order = SortOrder::new([2, 0, 1]).map_err(raise)?;
    a.sort(order);
    println!("sorted by {order}:\n{a}");

    for policy in [
        DuplicatePolicy::Add,
        DuplicatePolicy::LeaveAlone,
        DuplicatePolicy::Replace,
    ] {
        let config = ConsolidateConfig::new(policy).with_eliminate_none(true);
        let c = consolidate(&a, &config)?;
        println!("consolidated with {policy}:\n{c}");
    }

    let mut dense = DenseArray::<f64, 3>::filled(shape, f64::NAN)?;
    merge_into(&a, &mut dense, DuplicatePolicy::ReplaceThenAdd, true)?;
    println!("dense:\n{dense}");

    Ok(())
}
