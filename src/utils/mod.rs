//! Sequence primitives shared by the tiling pipeline: fixed-size batching
//! and right-padding of short lists.

/// Partition `sequence` into consecutive chunks of `batch_size` elements;
/// the last chunk may be short. A zero batch size is treated as one.
pub fn create_batches<T: Clone>(sequence: &[T], batch_size: usize) -> Vec<Vec<T>> {
    sequence
        .chunks(batch_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Right-pad `sequence` with clones of `content` up to `desired_size`.
/// Sequences already at or beyond the target length are returned unchanged.
pub fn fill<T: Clone>(mut sequence: Vec<T>, desired_size: usize, content: T) -> Vec<T> {
    while sequence.len() < desired_size {
        sequence.push(content.clone());
    }
    sequence
}
