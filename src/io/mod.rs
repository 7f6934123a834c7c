pub mod reader;
pub mod writer;

pub use reader::{parse_transactions, read_transactions};
pub use writer::{default_output_path, write_csv, write_csv_file};
