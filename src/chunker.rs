//! Fixed-size line batching.
//!
//! Batching only amortizes channel traffic between the producer and the
//! workers; it carries no semantic meaning and must not affect the
//! aggregated result.

use std::io;

/// Lazy, single-pass batching iterator over a fallible line sequence.
pub struct Chunker<I> {
    lines: I,
    size: usize,
    done: bool,
}

/// Batch `lines` into chunks of at most `size` lines; the final batch
/// may be short. An I/O error from the underlying reader is yielded as
/// an `Err` batch and ends the sequence.
pub fn chunks<I>(lines: I, size: usize) -> Chunker<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    debug_assert!(size > 0);
    Chunker {
        lines,
        size,
        done: false,
    }
}

impl<I> Iterator for Chunker<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut batch = Vec::with_capacity(self.size);
        while batch.len() < self.size {
            match self.lines.next() {
                Some(Ok(line)) => batch.push(line),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> impl Iterator<Item = io::Result<String>> {
        (0..n).map(|i| Ok(format!("line{}", i)))
    }

    fn collect(n: usize, size: usize) -> Vec<Vec<String>> {
        chunks(lines(n), size).map(|b| b.unwrap()).collect()
    }

    #[test]
    fn test_even_division() {
        let batches = collect(6, 3);
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 3));
    }

    #[test]
    fn test_short_final_batch() {
        let batches = collect(7, 3);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2], vec!["line6".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_no_batches() {
        assert!(collect(0, 3).is_empty());
    }

    #[test]
    fn test_batch_smaller_than_size() {
        let batches = collect(2, 10);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 2);
    }

    #[test]
    fn test_preserves_line_order() {
        let flat: Vec<String> = collect(10, 4).into_iter().flatten().collect();
        let expected: Vec<String> = (0..10).map(|i| format!("line{}", i)).collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_error_ends_sequence() {
        let input = vec![
            Ok("a".to_string()),
            Ok("b".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad byte")),
            Ok("c".to_string()),
        ];
        let mut chunker = chunks(input.into_iter(), 10);
        assert!(chunker.next().unwrap().is_err());
        assert!(chunker.next().is_none());
    }
}
