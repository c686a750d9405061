use super::PositionalRecordSet;
use crate::dropdown::DropdownMap;
use crate::error::SetError;
use crate::field_value::FieldValue;
use crate::key::SetKey;
use crate::record::Fielded;
use tracing::debug;

impl<R: Fielded> PositionalRecordSet<R> {
    /// Project the set into `record[key_field] → record[value_field]`, in
    /// sequence order.
    ///
    /// With `empty_label`, the map opens with a "no selection" entry keyed by
    /// the empty string. Records sharing a key collapse onto the first one's
    /// slot with the later label. Fails with [`SetError::MissingField`] when
    /// a record lacks either field.
    pub fn map(
        &self,
        key_field: &str,
        value_field: &str,
        empty_label: Option<&str>,
    ) -> Result<DropdownMap, SetError> {
        let mut out = DropdownMap::with_capacity(self.count() + usize::from(empty_label.is_some()));
        if let Some(label) = empty_label {
            out.insert(SetKey::Str(self.empty_key.clone()), FieldValue::from(label));
        }
        for record in self.iter() {
            let key = SetKey::from_field_value(&*record.field(key_field)?);
            let label = record.field(value_field)?.into_owned();
            out.insert(key, label);
        }
        debug!(
            key_field,
            value_field,
            entries = out.len(),
            "record set projected"
        );
        Ok(out)
    }

    /// Older name for [`map`](Self::map).
    #[inline]
    pub fn to_dropdown_map(
        &self,
        key_field: &str,
        value_field: &str,
        empty_label: Option<&str>,
    ) -> Result<DropdownMap, SetError> {
        self.map(key_field, value_field, empty_label)
    }

    /// One field's value from every record, in sequence order.
    pub fn column(&self, field: &str) -> Result<Vec<FieldValue>, SetError> {
        self.iter()
            .map(|record| {
                record
                    .field(field)
                    .map(|value| value.into_owned())
                    .map_err(SetError::from)
            })
            .collect()
    }
}
