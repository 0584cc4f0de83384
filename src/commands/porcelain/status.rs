use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusReport;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> Result<StatusReport, RepositoryError> {
        self.ensure_initialized()?;

        let current = self.current_branch();
        let report = StatusReport::new(
            current.clone(),
            self.refs()
                .names()
                .filter(|name| *name != current)
                .cloned()
                .collect(),
            self.index().staged().map(|path| path.to_path_buf()).collect(),
            self.index().removed().map(|path| path.to_path_buf()).collect(),
        );

        write!(self.writer(), "{}", report)?;

        Ok(report)
    }
}
