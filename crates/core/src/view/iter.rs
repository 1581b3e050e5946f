use super::View;

/// Iterator over the elements of a [`View`], produced by [`View::values`].
///
/// Elements are computed on demand by calling [`View::at`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V: ?Sized> {
    view: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V: View + ?Sized> Iter<'a, V> {
    /// Creates an iterator over every element of `view`.
    pub fn new(view: &'a V) -> Self {
        Self {
            view,
            front: 0,
            back: view.len(),
        }
    }
}

impl<V: View + ?Sized> Iterator for Iter<'_, V> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        let value = self.view.at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<f64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<V: View + ?Sized> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.at(self.back))
    }
}

impl<V: View + ?Sized> ExactSizeIterator for Iter<'_, V> {}

impl<V: View + ?Sized> std::iter::FusedIterator for Iter<'_, V> {}
