//! Window state and action handling, independent of rendering.
//!
//! Every button maps to one [`Action`]; [`AppState::handle`] runs it against
//! the controller and decides which dialog to show. Rendering code only reads
//! this state and emits actions.

use std::path::PathBuf;

use soil_core::{
    Confirmation, Controller, ExportFormat, NutrientChart, ReadingGateway, RecordGenerator,
    SoilReading,
};
use tracing::{debug, warn};

use super::dialogs::{Dialog, Modal, ModalResponse};

/// A user action from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertRandom,
    Export,
    ShowGraph,
    Refresh,
    DeleteSelected,
    DeleteAll,
    Select(i64),
    Modal(ModalResponse),
}

/// Everything the window shows.
pub struct AppState<G, R> {
    controller: Controller<G, R>,
    rows: Vec<SoilReading>,
    selected: Option<i64>,
    chart: Option<NutrientChart>,
    modal: Option<Modal>,
    export_path: PathBuf,
    export_format: ExportFormat,
}

impl<G: ReadingGateway, R: RecordGenerator> AppState<G, R> {
    pub fn new(
        controller: Controller<G, R>,
        export_path: PathBuf,
        export_format: ExportFormat,
    ) -> Self {
        Self {
            controller,
            rows: Vec::new(),
            selected: None,
            chart: None,
            modal: None,
            export_path,
            export_format,
        }
    }

    /// Grid rows, ascending by test date.
    pub fn rows(&self) -> &[SoilReading] {
        &self.rows
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// The last chart drawn by "Show Graph".
    pub fn chart(&self) -> Option<&NutrientChart> {
        self.chart.as_ref()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn export_path(&self) -> &PathBuf {
        &self.export_path
    }

    pub fn batch_size(&self) -> usize {
        self.controller.batch_size()
    }

    /// Run one user action.
    pub fn handle(&mut self, action: Action) {
        debug!("Handling {:?}", action);
        match action {
            Action::InsertRandom => self.insert_random(),
            Action::Export => self.export(),
            Action::ShowGraph => self.show_graph(),
            Action::Refresh => self.reload(),
            Action::DeleteSelected => self.delete_selected(),
            Action::DeleteAll => self.modal = Some(Modal::ConfirmDeleteAll),
            Action::Select(id) => self.selected = Some(id),
            Action::Modal(response) => self.close_modal(response),
        }
    }

    /// Re-fetch the grid rows. On failure the previous rows stay.
    pub fn reload(&mut self) {
        match self.controller.refresh() {
            Ok(rows) => {
                if let Some(id) = self.selected
                    && !rows.iter().any(|r| r.id == id)
                {
                    self.selected = None;
                }
                self.rows = rows;
            }
            Err(e) => self.fail(&e),
        }
    }

    fn insert_random(&mut self) {
        match self.controller.insert_random_batch() {
            Ok(inserted) => {
                self.show(Dialog::info(
                    "Insertion Successful",
                    format!("{} records inserted successfully!", inserted),
                ));
                self.reload();
            }
            Err(e) => self.fail(&e),
        }
    }

    fn export(&mut self) {
        match self.controller.export(&self.export_path, self.export_format) {
            Ok(summary) => self.show(Dialog::info(
                "Export Successful",
                format!("Data exported as {} successfully!", summary.format.label()),
            )),
            Err(e) => self.fail(&e),
        }
    }

    fn show_graph(&mut self) {
        // An empty table keeps whatever chart was drawn before.
        match self.controller.chart() {
            Ok(chart) => self.chart = Some(chart),
            Err(e) => self.fail(&e),
        }
    }

    fn delete_selected(&mut self) {
        match self.controller.delete_selected(self.selected) {
            Ok(_) => {
                self.selected = None;
                self.show(Dialog::info(
                    "Deletion Successful",
                    "Selected record deleted successfully!",
                ));
                self.reload();
            }
            Err(e) => self.fail(&e),
        }
    }

    fn close_modal(&mut self, response: ModalResponse) {
        let was_confirm = matches!(self.modal, Some(Modal::ConfirmDeleteAll));
        self.modal = None;

        if let (true, ModalResponse::Answered(answer)) = (was_confirm, response) {
            self.delete_all(answer);
        }
    }

    fn delete_all(&mut self, answer: Confirmation) {
        match self.controller.delete_all(answer) {
            Ok(Some(_)) => {
                self.selected = None;
                self.show(Dialog::info(
                    "Deletion Successful",
                    "All records have been deleted successfully!",
                ));
                self.reload();
            }
            Ok(None) => {}
            Err(e) => self.fail(&e),
        }
    }

    fn show(&mut self, dialog: Dialog) {
        self.modal = Some(Modal::Message(dialog));
    }

    fn fail(&mut self, err: &soil_core::Error) {
        if !err.is_warning() {
            warn!("Action failed: {}", err);
        }
        // A failed reload after a success message replaces that message.
        self.show(Dialog::from_error(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::dialogs::DialogKind;
    use soil_core::RandomGenerator;
    use soil_core::mock::MockGateway;

    fn state(gateway: MockGateway) -> AppState<MockGateway, RandomGenerator> {
        let controller = Controller::new(gateway, RandomGenerator::seeded(3)).with_batch_size(5);
        let mut state = AppState::new(controller, PathBuf::from("unused.csv"), ExportFormat::Csv);
        state.reload();
        state
    }

    fn message(state: &AppState<MockGateway, RandomGenerator>) -> &Dialog {
        match state.modal() {
            Some(Modal::Message(dialog)) => dialog,
            other => panic!("expected message dialog, got {other:?}"),
        }
    }

    fn dismiss(state: &mut AppState<MockGateway, RandomGenerator>) {
        state.handle(Action::Modal(ModalResponse::Dismissed));
    }

    /// State with five rows shown, then backed by a gateway that always fails.
    fn broken_after_insert() -> AppState<MockGateway, RandomGenerator> {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        dismiss(&mut s);

        let mut failing = MockGateway::new();
        failing.set_failure(Some("connection lost"));
        s.controller = Controller::new(failing, RandomGenerator::seeded(3)).with_batch_size(5);
        s
    }

    fn assert_error_keeps_rows(s: &AppState<MockGateway, RandomGenerator>, rows: &[SoilReading]) {
        assert_eq!(message(s).kind, DialogKind::Error);
        assert_eq!(message(s).title, "Error");
        assert!(message(s).message.contains("connection lost"));
        assert_eq!(s.rows(), rows);
    }

    #[test]
    fn test_insert_shows_count_and_refreshes() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);

        assert_eq!(message(&s).message, "5 records inserted successfully!");
        assert_eq!(message(&s).title, "Insertion Successful");
        assert_eq!(s.rows().len(), 5);
        assert!(s.rows().windows(2).all(|w| w[0].test_date <= w[1].test_date));
    }

    #[test]
    fn test_show_graph_empty_warns() {
        let mut s = state(MockGateway::new());
        s.handle(Action::ShowGraph);

        assert_eq!(message(&s).kind, DialogKind::Warning);
        assert_eq!(message(&s).message, "No data available to display!");
        assert!(s.chart().is_none());
    }

    #[test]
    fn test_show_graph_replaces_chart() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        dismiss(&mut s);

        s.handle(Action::ShowGraph);
        assert!(s.modal().is_none());
        assert_eq!(s.chart().unwrap().point_count(), 5);

        s.handle(Action::InsertRandom);
        dismiss(&mut s);
        s.handle(Action::ShowGraph);
        assert_eq!(s.chart().unwrap().point_count(), 10);
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        dismiss(&mut s);

        s.handle(Action::DeleteSelected);
        assert_eq!(message(&s).message, "Please select a row to delete.");
        assert_eq!(s.rows().len(), 5);
    }

    #[test]
    fn test_delete_selected_row() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        dismiss(&mut s);
        let id = s.rows()[2].id;

        s.handle(Action::Select(id));
        assert_eq!(s.selected(), Some(id));
        s.handle(Action::DeleteSelected);

        assert_eq!(message(&s).message, "Selected record deleted successfully!");
        assert_eq!(s.rows().len(), 4);
        assert!(s.rows().iter().all(|r| r.id != id));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_delete_all_declined_keeps_rows() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        dismiss(&mut s);

        s.handle(Action::DeleteAll);
        assert_eq!(s.modal(), Some(&Modal::ConfirmDeleteAll));
        s.handle(Action::Modal(ModalResponse::Answered(Confirmation::No)));

        assert!(s.modal().is_none());
        assert_eq!(s.rows().len(), 5);
    }

    #[test]
    fn test_delete_all_confirmed_clears_grid() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        dismiss(&mut s);

        s.handle(Action::DeleteAll);
        s.handle(Action::Modal(ModalResponse::Answered(Confirmation::Yes)));

        assert_eq!(
            message(&s).message,
            "All records have been deleted successfully!"
        );
        assert!(s.rows().is_empty());
    }

    #[test]
    fn test_failed_refresh_keeps_last_rows() {
        let mut s = broken_after_insert();
        let rows = s.rows().to_vec();

        s.handle(Action::Refresh);
        assert_error_keeps_rows(&s, &rows);
    }

    #[test]
    fn test_failed_insert_keeps_last_rows() {
        let mut s = broken_after_insert();
        let rows = s.rows().to_vec();

        s.handle(Action::InsertRandom);
        assert_error_keeps_rows(&s, &rows);
    }

    #[test]
    fn test_failed_delete_selected_keeps_rows_and_selection() {
        let mut s = broken_after_insert();
        let rows = s.rows().to_vec();
        s.handle(Action::Select(rows[0].id));

        s.handle(Action::DeleteSelected);
        assert_error_keeps_rows(&s, &rows);
        assert_eq!(s.selected(), Some(rows[0].id));
    }

    #[test]
    fn test_failed_delete_all_keeps_last_rows() {
        let mut s = broken_after_insert();
        let rows = s.rows().to_vec();

        s.handle(Action::DeleteAll);
        s.handle(Action::Modal(ModalResponse::Answered(Confirmation::Yes)));
        assert_error_keeps_rows(&s, &rows);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil_health_data.csv");
        let controller = Controller::new(MockGateway::new(), RandomGenerator::seeded(1))
            .with_batch_size(3);
        let mut s = AppState::new(controller, path.clone(), ExportFormat::Csv);

        s.handle(Action::InsertRandom);
        dismiss(&mut s);
        s.handle(Action::Export);

        assert_eq!(message(&s).message, "Data exported as CSV successfully!");
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_dismiss_message_does_not_delete() {
        let mut s = state(MockGateway::new());
        s.handle(Action::InsertRandom);
        s.handle(Action::Modal(ModalResponse::Answered(Confirmation::Yes)));

        assert!(s.modal().is_none());
        assert_eq!(s.rows().len(), 5);
    }
}
