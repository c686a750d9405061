//! Ordered record collections with positional decoration.
//!
//! A [`PositionalRecordSet`] holds records under integer or string keys,
//! keeps them in insertion order, and tells each record where it sits in a
//! traversal (`Pos`, `First`, `Last`, `Middle`, `Even`, `Odd`). It can also
//! project itself into a key → label [`DropdownMap`] for option lists.
//!
//! ```
//! use record_set::{PositionalRecordSet, record};
//!
//! let mut set: PositionalRecordSet = [
//!     record! { "ID" => 1i64, "Title" => "Joe" },
//!     record! { "ID" => 2i64, "Title" => "Jane" },
//! ]
//! .into_iter()
//! .collect();
//!
//! for r in &mut set {
//!     if r.is_last() {
//!         assert_eq!(r.get_str("Title"), Some("Jane"));
//!     }
//! }
//!
//! let options = set.map("ID", "Title", Some("(Select one)")).unwrap();
//! assert_eq!(options.len(), 3);
//! ```

pub mod action;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod field_value;
pub mod key;
pub mod position;
pub mod record;
pub mod record_set;

pub use config::RecordSetConfig;
pub use dropdown::DropdownMap;
pub use error::{RecordError, SetError};
pub use field_value::FieldValue;
pub use key::SetKey;
pub use position::Position;
pub use record::{Decoratable, Fielded, Record};
pub use record_set::PositionalRecordSet;
