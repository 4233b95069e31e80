pub mod types;

pub use types::ConvertError;
