use super::PositionalRecordSet;
use crate::key::SetKey;
use indexmap::map::{Values, ValuesMut};
use crate::position::Position;
use crate::record::Decoratable;
use tracing::debug;

impl<R> PositionalRecordSet<R> {
    /// Records in sequence order. Nothing is decorated.
    #[inline]
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.slots.values(),
        }
    }

    /// `(key, record)` pairs in sequence order.
    pub fn iter_keyed(&self) -> impl ExactSizeIterator<Item = (&SetKey, &R)> + '_ {
        self.slots.iter()
    }

    /// Each record paired with its position in this pass. Records are not
    /// modified; callers that want the facts on the record copy them over.
    #[inline]
    pub fn positions(&self) -> Positions<'_, R> {
        Positions {
            inner: self.slots.values(),
            pos: 0,
            total: self.count(),
        }
    }

    /// Record at position 1, without a traversal.
    #[inline]
    pub fn first(&self) -> Option<&R> {
        self.slots.first().map(|(_, r)| r)
    }

    /// Record at position `count()`, without a traversal.
    #[inline]
    pub fn last(&self) -> Option<&R> {
        self.slots.last().map(|(_, r)| r)
    }
}

impl<R: Decoratable> PositionalRecordSet<R> {
    /// Visit records in sequence order, decorating each one just before it
    /// is yielded.
    #[inline]
    pub fn iter_mut(&mut self) -> DecoratingIter<'_, R> {
        let total = self.count();
        DecoratingIter {
            inner: self.slots.values_mut(),
            pos: 0,
            total,
        }
    }

    /// One full decorating pass. Running it twice leaves the same values.
    pub fn decorate(&mut self) {
        let visited = self.iter_mut().count();
        debug!(visited, "record set decorated");
    }
}

// ─── Iterators ──────────────────────────────────────────────────────────────

pub struct Iter<'a, R> {
    inner: Values<'a, SetKey, R>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, R> ExactSizeIterator for Iter<'a, R> {}

pub struct Positions<'a, R> {
    inner: Values<'a, SetKey, R>,
    pos: usize,
    total: usize,
}

impl<'a, R> Iterator for Positions<'a, R> {
    type Item = (&'a R, Position);

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        self.pos += 1;
        Some((record, Position::new(self.pos, self.total)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, R> ExactSizeIterator for Positions<'a, R> {}

pub struct DecoratingIter<'a, R> {
    inner: ValuesMut<'a, SetKey, R>,
    pos: usize,
    total: usize,
}

impl<'a, R: Decoratable> Iterator for DecoratingIter<'a, R> {
    type Item = &'a mut R;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        self.pos += 1;
        record.decorate(Position::new(self.pos, self.total));
        Some(record)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, R: Decoratable> ExactSizeIterator for DecoratingIter<'a, R> {}

impl<'a, R> IntoIterator for &'a PositionalRecordSet<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, R: Decoratable> IntoIterator for &'a mut PositionalRecordSet<R> {
    type Item = &'a mut R;
    type IntoIter = DecoratingIter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
