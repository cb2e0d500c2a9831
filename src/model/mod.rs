mod field;
mod fix;
mod page;
mod record;
mod validation;

pub use field::{FieldKey, FieldKind, FieldValue};
pub use fix::Fix;
pub use page::{Page, Pager};
pub use record::RecapRecord;
pub use validation::{is_numeric_input, is_required, missing_required};
