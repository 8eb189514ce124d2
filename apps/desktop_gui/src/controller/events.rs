//! User actions collected while drawing a frame.

use page_core::page::PageEvent;
use shared::domain::{FormField, SectionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    NavigateTo(SectionId),
    EditField { field: FormField, value: String },
    Submit,
}

impl UiAction {
    /// Actions that change page state become reducer events; navigation
    /// only scrolls the view.
    pub fn into_page_event(self) -> Option<PageEvent> {
        match self {
            UiAction::NavigateTo(_) => None,
            UiAction::EditField { field, value } => Some(PageEvent::FieldEdited { field, value }),
            UiAction::Submit => Some(PageEvent::SubmitRequested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_never_reaches_the_reducer() {
        assert_eq!(UiAction::NavigateTo(SectionId::Contact).into_page_event(), None);
    }

    #[test]
    fn form_actions_map_to_page_events() {
        assert_eq!(
            UiAction::Submit.into_page_event(),
            Some(PageEvent::SubmitRequested)
        );
        assert_eq!(
            UiAction::EditField {
                field: FormField::Email,
                value: "ada@example.com".into(),
            }
            .into_page_event(),
            Some(PageEvent::FieldEdited {
                field: FormField::Email,
                value: "ada@example.com".into(),
            })
        );
    }
}
