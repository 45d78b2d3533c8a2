//! Sequential vs parallel vector fill.
//!
//! Both fill n slots with i * 2; the parallel form fans the index range
//! out across the rayon pool. The two results are always identical, the
//! interesting part is the wall clock (see benches/fill_profiles.rs).

use log::debug;
use rayon::prelude::*;

pub fn fill_sequential(n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        values.push(i as i64 * 2);
    }
    values
}

pub fn fill_parallel(n: usize) -> Vec<i64> {
    debug!("parallel fill of {n} slots across {} workers", rayon::current_num_threads());
    (0..n).into_par_iter().map(|i| i as i64 * 2).collect()
}
