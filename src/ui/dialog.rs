use crate::screens::AnalysisDialog;

/// Opens modal dialogs on the host
pub trait DialogService: Send + Sync {
    fn open_analysis(&self, dialog: AnalysisDialog);
}
