use crate::bench::Result;
use tikv_jemalloc_ctl::{epoch, stats};

/// Returns the number of bytes currently allocated by the application, as reported by jemalloc.
///
/// The figure covers only allocations served by jemalloc, so the binary installs
/// `tikv_jemallocator::Jemalloc` as its global allocator.
pub fn allocated() -> Result<usize> {
    epoch::advance()?;
    Ok(stats::allocated::read()?)
}
