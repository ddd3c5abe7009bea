pub mod index;
pub mod report;
pub mod row;
pub mod section;

pub use index::{check_alignment, IndexSection};
pub use report::HtmlReport;
pub use row::{Color, Resolved, Row, RowKind, NOT_APPLICABLE};
pub use section::{Section, Walk, WalkEvent};
