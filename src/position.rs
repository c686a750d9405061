use crate::field_value::FieldValue;

// ─── Decoration field names ─────────────────────────────────────────────────
pub const FIELD_POS: &str = "Pos";
pub const FIELD_FIRST: &str = "First";
pub const FIELD_LAST: &str = "Last";
pub const FIELD_MIDDLE: &str = "Middle";
pub const FIELD_EVEN: &str = "Even";
pub const FIELD_ODD: &str = "Odd";
pub const FIELD_TOTAL_ITEMS: &str = "TotalItems";

// ─── Position ───────────────────────────────────────────────────────────────

/// Where a record sits within one traversal: 1-based `pos` out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pos: usize,
    total: usize,
}

impl Position {
    /// `pos` is 1-based and must lie in `1..=total`.
    #[inline]
    pub fn new(pos: usize, total: usize) -> Self {
        debug_assert!(
            pos >= 1 && pos <= total,
            "Position::new: pos {pos} outside 1..={total}"
        );
        Self { pos, total }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.pos == 1
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.pos == self.total
    }

    #[inline]
    pub fn is_middle(&self) -> bool {
        !self.is_first() && !self.is_last()
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.pos % 2 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.pos % 2 == 1
    }

    /// True when the zero-based index is a multiple of `factor`, so
    /// `multiple_of(3)` holds for positions 1, 4, 7, ...
    #[inline]
    pub fn multiple_of(&self, factor: usize) -> bool {
        factor != 0 && (self.pos - 1) % factor == 0
    }

    /// Value of the decoration field `name`, or `None` if `name` is not one.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            FIELD_POS => FieldValue::from(self.pos),
            FIELD_FIRST => FieldValue::from(self.is_first()),
            FIELD_LAST => FieldValue::from(self.is_last()),
            FIELD_MIDDLE => FieldValue::from(self.is_middle()),
            FIELD_EVEN => FieldValue::from(self.is_even()),
            FIELD_ODD => FieldValue::from(self.is_odd()),
            FIELD_TOTAL_ITEMS => FieldValue::from(self.total),
            _ => return None,
        };
        Some(value)
    }
}
