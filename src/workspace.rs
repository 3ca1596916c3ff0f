//! Top-level application state for workspace front-ends.
//!
//! The state that page components share lives here as an explicit struct,
//! and view transitions go through a closed enumeration instead of
//! free-form string tags.

use crate::types::{DocType, GeneratedDocument, ProjectInputs};
use strum_macros::{Display, EnumString};

/// Closed set of workspace views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum View {
    #[default]
    Dashboard,
    ControlRoom,
    Generator,
    Editor,
    Sprint,
    Roadmap,
    Engineering,
    UxSystem,
    Release,
    Analytics,
    Templates,
    Settings,
}

/// Prefilled generator form carried over from the template gallery
#[derive(Debug, Clone, Default)]
pub struct TemplateDraft {
    pub doc_type: DocType,
    pub inputs: ProjectInputs,
}

/// Mutable state owned by the top-level controller and passed down to
/// views by reference. Nothing here survives a process restart.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Document currently open in the editor
    pub generated_doc: Option<GeneratedDocument>,
    /// Most recent first
    pub recent_docs: Vec<GeneratedDocument>,
    /// Pending template prefill for the generator
    pub template_draft: Option<TemplateDraft>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch views. Navigating anywhere except the generator discards a
    /// pending template draft, so a stale prefill never resurfaces later.
    pub fn navigate(&mut self, view: View) {
        if view != View::Generator {
            self.template_draft = None;
        }
        self.current_view = view;
    }

    /// Record a freshly generated document and open the editor on it
    pub fn open_document(&mut self, doc: GeneratedDocument) {
        self.recent_docs.insert(0, doc.clone());
        self.generated_doc = Some(doc);
        self.current_view = View::Editor;
    }

    /// Carry a template prefill into the generator view
    pub fn select_template(&mut self, draft: TemplateDraft) {
        self.template_draft = Some(draft);
        self.current_view = View::Generator;
    }

    /// Edit the open document in place. Returns false when no document is
    /// open.
    pub fn update_document_content(&mut self, content: String) -> bool {
        match self.generated_doc.as_mut() {
            Some(doc) => {
                doc.replace_content(content);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_round_trips_through_kebab_tags() {
        assert_eq!("control-room".parse::<View>().ok(), Some(View::ControlRoom));
        assert_eq!(View::UxSystem.to_string(), "ux-system");
        assert!("not-a-view".parse::<View>().is_err());
    }

    #[test]
    fn test_navigate_clears_template_draft_except_for_generator() {
        let mut state = AppState::new();
        state.select_template(TemplateDraft::default());
        assert_eq!(state.current_view, View::Generator);

        state.navigate(View::Generator);
        assert!(state.template_draft.is_some(), "draft survives generator");

        state.navigate(View::Dashboard);
        assert!(state.template_draft.is_none(), "draft cleared on leave");
    }
}
