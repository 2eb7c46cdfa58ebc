//! Header row inference for site status worksheets

pub mod column;
pub mod cursor;
pub mod error;
pub mod fields;
pub mod infer;
pub mod row;

pub use column::{cell_address, column_label, parse_column};
pub use fields::HeaderMap;
pub use infer::{Period, infer_header};
pub use row::HeaderRow;
