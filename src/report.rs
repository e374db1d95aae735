use std::io::{self, Write};

use crate::builder::INDEX_NAME_TEMPLATE;
use crate::classify::Buckets;

/// Writes the audit summary for `column`.
pub fn write_report<W: Write>(out: &mut W, column: &str, buckets: &Buckets) -> io::Result<()> {
    if !buckets.have_index.is_empty() {
        write!(
            out,
            "\nThe following tables have the '{}' column indexed:\n{}\n",
            column,
            buckets.have_index.join(", ")
        )?;
    }

    if !buckets.need_column.is_empty() {
        write!(
            out,
            "\nThe following tables don't have the '{}' column:\n{}\n",
            column,
            buckets.need_column.join(", ")
        )?;
    } else {
        write!(out, "\nAll tables have the '{}' column.\n", column)?;
    }

    if !buckets.need_index.is_empty() {
        write!(
            out,
            "\nAn index on the '{}' column named '{}' will be added to the following tables:\n{}\n",
            column,
            INDEX_NAME_TEMPLATE.replace("{column}", column),
            buckets.need_index.join(", ")
        )?;
    } else {
        write!(out, "\nNo indexes to add\n")?;
    }

    out.flush()
}
