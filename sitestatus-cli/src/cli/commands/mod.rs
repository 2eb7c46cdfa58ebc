pub mod column;
pub mod infer;

pub use column::ColumnCommands;
pub use infer::InferCommands;
