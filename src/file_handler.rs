use crate::canvas::CanvasController;
use std::path::PathBuf;

/// Source of destination paths for saving the drawing
pub trait SaveDialog {
    /// Ask for a destination. `None` when the user cancels.
    fn pick_save_path(&self) -> Option<PathBuf>;
}

/// Native "Save Drawing" dialog filtered to PNG images
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeSaveDialog;

impl SaveDialog for NativeSaveDialog {
    fn pick_save_path(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Save Drawing")
            .add_filter("PNG Images", &["png"])
            .save_file()
    }
}

/// Outcome shown to the user after a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReport {
    Saved(PathBuf),
    Failed(String),
}

impl SaveReport {
    pub fn title(&self) -> &'static str {
        match self {
            SaveReport::Saved(_) => "Success",
            SaveReport::Failed(_) => "Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            SaveReport::Saved(_) => "Drawing saved successfully!".to_owned(),
            SaveReport::Failed(reason) => format!("Error saving drawing: {reason}"),
        }
    }
}

pub struct FileHandler {
    dialog: Box<dyn SaveDialog>,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new(Box::new(NativeSaveDialog))
    }
}

impl std::fmt::Debug for FileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandler").finish_non_exhaustive()
    }
}

impl FileHandler {
    pub fn new(dialog: Box<dyn SaveDialog>) -> Self {
        Self { dialog }
    }

    /// Ask for a path and write the canvas there as PNG.
    /// Returns `None` if the dialog was cancelled.
    pub fn save_drawing(&self, canvas: &CanvasController) -> Option<SaveReport> {
        let Some(path) = self.dialog.pick_save_path() else {
            log::debug!("Save cancelled");
            return None;
        };

        let report = match canvas.save_png(&path) {
            Ok(saved) => SaveReport::Saved(saved),
            Err(err) => {
                log::error!("Failed to save drawing: {err}");
                SaveReport::Failed(err.to_string())
            }
        };
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDialog(Option<PathBuf>);

    impl SaveDialog for FixedDialog {
        fn pick_save_path(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn test_cancelled_dialog_saves_nothing() {
        let handler = FileHandler::new(Box::new(FixedDialog(None)));
        assert_eq!(handler.save_drawing(&CanvasController::new(4, 4)), None);
    }

    #[test]
    fn test_save_success_report() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FileHandler::new(Box::new(FixedDialog(Some(dir.path().join("sketch")))));

        let report = handler.save_drawing(&CanvasController::new(4, 4)).unwrap();
        let expected = dir.path().join("sketch.png");
        assert_eq!(report, SaveReport::Saved(expected.clone()));
        assert_eq!(report.title(), "Success");
        assert_eq!(report.message(), "Drawing saved successfully!");
        assert!(expected.exists());
    }

    #[test]
    fn test_save_failure_report() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("sketch.png");
        let handler = FileHandler::new(Box::new(FixedDialog(Some(target))));

        let report = handler.save_drawing(&CanvasController::new(4, 4)).unwrap();
        assert_eq!(report.title(), "Error");
        assert!(report.message().starts_with("Error saving drawing: Failed to write"));
    }
}
