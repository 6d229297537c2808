use pseo_content::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock PageExporter that keeps written pages in memory
#[derive(Default, Clone)]
pub struct MockPageExporter {
    pub written: Arc<Mutex<Vec<(String, String)>>>,
    fail_on: Option<String>,
}

impl MockPageExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when asked to write `file_name`
    pub fn failing_on(file_name: &str) -> Self {
        Self {
            written: Arc::default(),
            fail_on: Some(file_name.to_string()),
        }
    }

    pub fn file_names(&self) -> Vec<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn content_of(&self, file_name: &str) -> Option<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, content)| content.clone())
    }
}

impl PageExporter for MockPageExporter {
    fn export(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        if self.fail_on.as_deref() == Some(file_name) {
            return Err(PseoError::FileWriteError {
                path: PathBuf::from(file_name),
                details: "mock write failure".to_string(),
            }
            .into());
        }
        self.written
            .lock()
            .unwrap()
            .push((file_name.to_string(), content.to_string()));
        Ok(PathBuf::from("mock-out").join(file_name))
    }
}
