//! # Attribute Selection
//!
//! The processor only looks at attributes the operator names. Names come from a single
//! comma-separated configuration string:
//!
//! | Input | Result |
//! |-------|--------|
//! | `"a.test1"` | `{a.test1}` |
//! | `" a , b,a "` | `{a, b}` |
//! | `"a,,b,"` | `{a, b}` (empty segments dropped) |
//! | `" , "` | `{}` |
//! | `""`, `"   "` | `None` (nothing configured) |
//!
//! ## Usage
//!
//! ```
//! use ts2date::attributes::parse_attribute_list;
//!
//! let names = parse_attribute_list("created, updated").unwrap();
//! assert!(names.contains("created"));
//! assert_eq!(names.len(), 2);
//! ```

mod list;

pub use list::{parse_attribute_list, AttributeNameSet, LIST_SEPARATOR};
