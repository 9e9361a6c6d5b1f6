/// Iteration order over an input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    LeftToRight,
    /// Check digit is the first element visited
    RightToLeft,
}

impl Traversal {
    pub fn walk<S: Copy>(self, seq: &[S]) -> Walk<'_, S> {
        Walk {
            seq,
            front: 0,
            back: seq.len(),
            order: self,
        }
    }
}

/// Read-only view yielding `(physical_index, symbol)` in traversal order.
#[derive(Debug, Clone)]
pub struct Walk<'a, S> {
    seq: &'a [S],
    front: usize,
    back: usize,
    order: Traversal,
}

impl<S: Copy> Iterator for Walk<'_, S> {
    type Item = (usize, S);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let i = match self.order {
            Traversal::LeftToRight => {
                self.front += 1;
                self.front - 1
            }
            Traversal::RightToLeft => {
                self.back -= 1;
                self.back
            }
        };
        Some((i, self.seq[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<S: Copy> ExactSizeIterator for Walk<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_orders() {
        let seq = ['a', 'b', 'c'];
        let ltr: Vec<_> = Traversal::LeftToRight.walk(&seq).collect();
        let rtl: Vec<_> = Traversal::RightToLeft.walk(&seq).collect();
        assert_eq!(ltr, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
        assert_eq!(rtl, vec![(2, 'c'), (1, 'b'), (0, 'a')]);
    }

    #[test]
    fn empty() {
        let seq: [char; 0] = [];
        assert_eq!(Traversal::RightToLeft.walk(&seq).count(), 0);
        assert_eq!(Traversal::LeftToRight.walk(&seq).len(), 0);
    }
}
