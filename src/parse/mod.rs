pub mod task_parser;
pub mod task_serializer;

pub use task_parser::{DroppedRecord, RecordParseError, parse_record, parse_tasks};
pub use task_serializer::{serialize_task, serialize_tasks};

/// Separates the fields of a record
pub const DELIMITER: char = ',';

/// Fields per record: name, subject, priority, due date, completed
pub const FIELD_COUNT: usize = 5;

pub const TRUE_TEXT: &str = "True";
pub const FALSE_TEXT: &str = "False";
