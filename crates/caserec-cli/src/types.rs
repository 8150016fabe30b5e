use std::path::PathBuf;

use caserec_cli::pipeline::FileReport;

#[derive(Debug)]
pub struct CleanResult {
    pub schema_version: String,
    pub output_dir: PathBuf,
    pub files: Vec<FileReport>,
    pub concat_output: Option<PathBuf>,
    pub errors: Vec<String>,
    pub has_failures: bool,
}
