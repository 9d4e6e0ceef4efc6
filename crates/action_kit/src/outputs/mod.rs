//! Outputs file handling
//!
//! This module provides:
//! - `decoder`: Reads the heredoc records of an outputs file back into a map
//! - `writer`: Formats and appends heredoc records, as `set_output` does

mod decoder;
mod writer;

pub use decoder::{decode_outputs, parse_outputs, parse_outputs_from, resolve_output_path};
pub use writer::{
    append_file_command, new_delimiter, prepare_key_value_message, to_command_value,
    DELIMITER_PREFIX,
};
