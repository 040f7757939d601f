use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CloseApproach;
use crate::write::write_results;
use std::path::Path;

pub fn run(approaches: &[CloseApproach], path: &Path) -> Result<CmdResult> {
    let count = write_results(approaches, path)?;

    let mut result = CmdResult::default().with_written_to(path.to_path_buf());
    if count == 0 {
        result.add_message(CmdMessage::warning(format!(
            "No close approaches to write; created empty {}",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Wrote {} close approaches to {}",
            count,
            path.display()
        )));
    }
    Ok(result)
}
