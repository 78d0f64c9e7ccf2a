//! Round-robin distribution of GIFs across screens.

use std::collections::BTreeMap;

use crate::screen::ScreenId;

/// GIF paths per screen, in registry order.
pub type GifBuckets = BTreeMap<ScreenId, Vec<String>>;

/// Assign the GIF at registry index `i` to screen `i % 5 + 1`.
///
/// Every screen gets a bucket, possibly empty.
pub fn distribute_gifs(gifs: &[String]) -> GifBuckets {
    let mut buckets: GifBuckets = ScreenId::all().map(|id| (id, Vec::new())).collect();
    for (index, path) in gifs.iter().enumerate() {
        buckets
            .entry(ScreenId::for_index(index))
            .or_default()
            .push(path.clone());
    }
    buckets
}
