//! Main application UI and state management.
//! Routes between the lecture content, flashcard and quiz views of the
//! selected lecture; owns the per-view state those views need.

use eframe::egui;
use portal_app::content::{Catalog, DEFAULT_LECTURE_ID};
use portal_app::models::{FLIP_HINT, FlashcardCell, QuizEngine};

/// Which view fills the central panel
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Content,
    Flashcards,
    Quiz,
}

/// Main application state
pub struct PortalApp {
    catalog: Catalog,
    selected_lecture_id: u32,
    active_view: ActiveView,

    // Per-view state, rebuilt whenever the view or lecture selection changes
    flashcard_cells: Vec<FlashcardCell>,
    quiz: Option<QuizEngine>,
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("AI for Data Science - Learning Portal");
            ui.separator();

            // We store the clicked tab to execute the switch after rendering
            let mut action_view: Option<ActiveView> = None;

            ui.horizontal(|ui| {
                for (view, label) in [
                    (ActiveView::Content, "Lecture Content"),
                    (ActiveView::Flashcards, "Flashcards"),
                    (ActiveView::Quiz, "Quiz"),
                ] {
                    if ui
                        .selectable_label(self.active_view == view, label)
                        .clicked()
                    {
                        action_view = Some(view);
                    }
                }
            });
            ui.separator();

            if let Some(view) = action_view {
                self.select_view(view);
            }

            // Lecture picker, shown only when the catalog carries more than
            // one lecture (the seeded dataset has a single one)
            if self.catalog.lectures().len() > 1 {
                let mut action_lecture: Option<u32> = None;

                ui.horizontal(|ui| {
                    for lecture in self.catalog.lectures() {
                        if ui
                            .selectable_label(self.selected_lecture_id == lecture.id, &lecture.title)
                            .clicked()
                        {
                            action_lecture = Some(lecture.id);
                        }
                    }
                });
                ui.separator();

                if let Some(id) = action_lecture {
                    self.select_lecture(id);
                }
            }

            if self.catalog.find_lecture(self.selected_lecture_id).is_none() {
                // Unreachable with the seeded dataset; refuse rather than render
                ui.label(format!(
                    "Lecture {} is missing from the catalog.",
                    self.selected_lecture_id
                ));
                return;
            }

            match self.active_view {
                ActiveView::Content => self.render_content_view(ui),
                ActiveView::Flashcards => self.render_flashcards_view(ui),
                ActiveView::Quiz => self.render_quiz_view(ui),
            }
        });
    }
}

impl PortalApp {
    /// Creates the application over a loaded catalog, starting on the
    /// content view of the default lecture.
    pub fn new_with_catalog(catalog: Catalog) -> Self {
        let mut app = Self {
            catalog,
            selected_lecture_id: DEFAULT_LECTURE_ID,
            active_view: ActiveView::default(),
            flashcard_cells: Vec::new(),
            quiz: None,
        };
        app.rebuild_view_state();
        app
    }

    /// Switches the active view. The outgoing view's transient state is
    /// dropped and the incoming view gets a fresh instance, so reveal flags
    /// and quiz progress reset exactly when the view is recreated.
    pub fn select_view(&mut self, view: ActiveView) {
        if self.active_view != view {
            self.active_view = view;
            self.rebuild_view_state();
        }
    }

    /// Changes the selected lecture. Unknown ids are refused and the
    /// current selection kept.
    pub fn select_lecture(&mut self, id: u32) {
        if self.catalog.find_lecture(id).is_none() {
            log::warn!("refusing to select unknown lecture id {id}");
            return;
        }
        if self.selected_lecture_id != id {
            self.selected_lecture_id = id;
            self.rebuild_view_state();
        }
    }

    fn rebuild_view_state(&mut self) {
        self.flashcard_cells.clear();
        self.quiz = None;

        let Some(lecture) = self.catalog.find_lecture(self.selected_lecture_id) else {
            return;
        };

        match self.active_view {
            ActiveView::Content => {}
            ActiveView::Flashcards => {
                self.flashcard_cells = lecture
                    .flashcards
                    .iter()
                    .cloned()
                    .map(FlashcardCell::new)
                    .collect();
            }
            ActiveView::Quiz => {
                self.quiz = Some(QuizEngine::new(lecture.quiz.clone()));
            }
        }
    }

    /// Renders the lecture notes: title, date and topic blocks
    fn render_content_view(&mut self, ui: &mut egui::Ui) {
        let Some(lecture) = self.catalog.find_lecture(self.selected_lecture_id) else {
            return;
        };

        ui.heading(&lecture.title);
        ui.label(format!("Date: {}", lecture.date_display()));
        ui.add_space(10.0);

        egui::ScrollArea::vertical()
            .id_source("topics_list")
            .show(ui, |ui| {
                for topic in &lecture.topics {
                    ui.group(|ui| {
                        ui.strong(&topic.title);
                        ui.label(&topic.content);
                    });
                }
            });
    }

    /// Renders the flashcard grid; clicking a card flips it
    fn render_flashcards_view(&mut self, ui: &mut egui::Ui) {
        if let Some(lecture) = self.catalog.find_lecture(self.selected_lecture_id) {
            ui.heading(format!("Flashcards: {}", lecture.title));
        }
        ui.add_space(10.0);

        // We store the clicked card to flip it after UI rendering
        let mut action_flip: Option<usize> = None;

        egui::ScrollArea::vertical()
            .id_source("flashcards_grid")
            .show(ui, |ui| {
                for (i, cell) in self.flashcard_cells.iter().enumerate() {
                    let response = ui
                        .group(|ui| {
                            ui.set_min_height(80.0);
                            ui.set_width(ui.available_width());
                            ui.vertical_centered(|ui| {
                                ui.add_space(10.0);
                                ui.label(cell.face_text());
                                if !cell.is_revealed() {
                                    ui.add_space(10.0);
                                    ui.weak(FLIP_HINT);
                                }
                                ui.add_space(10.0);
                            });
                        })
                        .response;

                    if response.interact(egui::Sense::click()).clicked() {
                        action_flip = Some(i);
                    }
                }
            });

        // Execute deferred action
        if let Some(i) = action_flip {
            if let Some(cell) = self.flashcard_cells.get_mut(i) {
                cell.toggle();
            }
        }
    }

    /// Renders the quiz: current question with one button per option, or
    /// the final score with a restart button
    fn render_quiz_view(&mut self, ui: &mut egui::Ui) {
        if let Some(lecture) = self.catalog.find_lecture(self.selected_lecture_id) {
            ui.heading(format!("Quiz: {}", lecture.title));
        }
        ui.add_space(10.0);

        let Some(quiz) = &self.quiz else {
            return;
        };

        // We store actions to execute after UI rendering
        let mut action_answer: Option<String> = None;
        let mut action_reset = false;

        if let Some(question) = quiz.current_question() {
            ui.label(quiz.progress_message());
            ui.add_space(10.0);

            ui.group(|ui| {
                ui.label(&question.question);
            });

            ui.add_space(10.0);

            for option in &question.options {
                if ui.button(option).clicked() {
                    action_answer = Some(option.clone());
                }
            }
        } else {
            ui.heading(quiz.progress_message());
            ui.add_space(10.0);

            if ui.button("Restart Quiz").clicked() {
                action_reset = true;
            }
        }

        // Execute deferred actions
        if let Some(choice) = action_answer {
            if let Some(quiz) = &mut self.quiz {
                // The UI hides answer buttons once finished, so a rejection
                // here is a programming error, not a user-facing condition
                if let Err(err) = quiz.submit_answer(&choice) {
                    log::warn!("answer submission rejected: {err}");
                }
            }
        }
        if action_reset {
            if let Some(quiz) = &mut self.quiz {
                quiz.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_app::models::QuizState;

    fn app() -> PortalApp {
        PortalApp::new_with_catalog(Catalog::seeded().unwrap())
    }

    #[test]
    fn test_starts_on_content_view_of_default_lecture() {
        let app = app();
        assert!(app.active_view == ActiveView::Content);
        assert_eq!(app.selected_lecture_id, DEFAULT_LECTURE_ID);
        assert!(app.flashcard_cells.is_empty());
        assert!(app.quiz.is_none());
    }

    #[test]
    fn test_entering_flashcards_view_builds_one_cell_per_card() {
        let mut app = app();
        app.select_view(ActiveView::Flashcards);
        assert_eq!(app.flashcard_cells.len(), 8);
        assert!(app.flashcard_cells.iter().all(|c| !c.is_revealed()));
    }

    #[test]
    fn test_leaving_and_returning_recreates_flashcards() {
        let mut app = app();
        app.select_view(ActiveView::Flashcards);
        app.flashcard_cells[0].toggle();
        assert!(app.flashcard_cells[0].is_revealed());

        app.select_view(ActiveView::Content);
        app.select_view(ActiveView::Flashcards);
        assert!(!app.flashcard_cells[0].is_revealed());
    }

    #[test]
    fn test_leaving_quiz_view_discards_the_session() {
        let mut app = app();
        app.select_view(ActiveView::Quiz);
        app.quiz
            .as_mut()
            .unwrap()
            .submit_answer("Nesterov Momentum")
            .unwrap();

        app.select_view(ActiveView::Content);
        assert!(app.quiz.is_none());

        app.select_view(ActiveView::Quiz);
        assert_eq!(
            *app.quiz.as_ref().unwrap().state(),
            QuizState::InProgress {
                current: 0,
                score: 0
            }
        );
    }

    #[test]
    fn test_reselecting_the_active_view_keeps_state() {
        let mut app = app();
        app.select_view(ActiveView::Flashcards);
        app.flashcard_cells[0].toggle();

        app.select_view(ActiveView::Flashcards);
        assert!(app.flashcard_cells[0].is_revealed());
    }

    #[test]
    fn test_unknown_lecture_selection_is_refused() {
        let mut app = app();
        app.select_lecture(7);
        assert_eq!(app.selected_lecture_id, DEFAULT_LECTURE_ID);
    }

    #[test]
    fn test_selecting_another_lecture_rebuilds_view_state() {
        let raw = r#"[
  {
    "id": 42, "title": "Lecture 42", "date": "11/3/2025", "topics": [],
    "flashcards": [{ "question": "q1", "answer": "a1" }],
    "quiz": []
  },
  {
    "id": 43, "title": "Lecture 43", "date": "11/5/2025", "topics": [],
    "flashcards": [
      { "question": "q1", "answer": "a1" },
      { "question": "q2", "answer": "a2" }
    ],
    "quiz": []
  }
]"#;
        let mut app = PortalApp::new_with_catalog(Catalog::from_json(raw).unwrap());
        app.select_view(ActiveView::Flashcards);
        assert_eq!(app.flashcard_cells.len(), 1);

        app.select_lecture(43);
        assert_eq!(app.selected_lecture_id, 43);
        assert_eq!(app.flashcard_cells.len(), 2);
        assert!(app.flashcard_cells.iter().all(|c| !c.is_revealed()));
    }
}
