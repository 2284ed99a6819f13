//! Application state

use crate::state::forms::{ContactForm, FieldName};
use crate::state::toast::Toast;

/// Focus position within the form: one slot per field plus the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    FirstName,
    LastName,
    Email,
    Query,
    Message,
    Consent,
    Submit,
}

impl FormFocus {
    pub const ALL: [FormFocus; 7] = [
        FormFocus::FirstName,
        FormFocus::LastName,
        FormFocus::Email,
        FormFocus::Query,
        FormFocus::Message,
        FormFocus::Consent,
        FormFocus::Submit,
    ];

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next slot in visual order (wraps around)
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous slot in visual order (wraps around)
    pub fn prev(&self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[pos - 1]
        }
    }

    /// The field under this slot, if any (the submit button has none)
    pub fn field(&self) -> Option<FieldName> {
        match self {
            FormFocus::FirstName => Some(FieldName::FirstName),
            FormFocus::LastName => Some(FieldName::LastName),
            FormFocus::Email => Some(FieldName::Email),
            FormFocus::Query => Some(FieldName::Query),
            FormFocus::Message => Some(FieldName::Message),
            FormFocus::Consent => Some(FieldName::Consent),
            FormFocus::Submit => None,
        }
    }

    /// The field under this slot when it takes typed text
    pub fn text_field(&self) -> Option<FieldName> {
        match self.field() {
            Some(FieldName::Query) | Some(FieldName::Consent) | None => None,
            field => field,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The form core: current values and current errors
    pub form: ContactForm,
    /// Which slot has keyboard focus (presentation state only)
    pub focus: FormFocus,
    /// Active success banner, if any
    pub toast: Option<Toast>,
}

impl AppState {
    /// Drop the toast once its animation has run out
    pub fn expire_toast(&mut self) {
        if let Some(ref mut toast) = self.toast {
            toast.update();
            if toast.is_done() {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod form_focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_first_field() {
            assert_eq!(FormFocus::default(), FormFocus::FirstName);
        }

        #[test]
        fn test_next_walks_the_whole_form_and_wraps() {
            let mut focus = FormFocus::FirstName;
            for expected in FormFocus::ALL.into_iter().skip(1) {
                focus = focus.next();
                assert_eq!(focus, expected);
            }
            assert_eq!(focus.next(), FormFocus::FirstName);
        }

        #[test]
        fn test_prev_wraps_to_submit() {
            assert_eq!(FormFocus::FirstName.prev(), FormFocus::Submit);
            assert_eq!(FormFocus::Submit.prev(), FormFocus::Consent);
        }

        #[test]
        fn test_prev_undoes_next() {
            for focus in FormFocus::ALL {
                assert_eq!(focus.next().prev(), focus);
            }
        }

        #[test]
        fn test_submit_slot_has_no_field() {
            assert_eq!(FormFocus::Submit.field(), None);
            assert_eq!(FormFocus::Email.field(), Some(FieldName::Email));
        }

        #[test]
        fn test_text_field_excludes_query_consent_and_submit() {
            assert_eq!(FormFocus::FirstName.text_field(), Some(FieldName::FirstName));
            assert_eq!(FormFocus::Message.text_field(), Some(FieldName::Message));
            assert_eq!(FormFocus::Query.text_field(), None);
            assert_eq!(FormFocus::Consent.text_field(), None);
            assert_eq!(FormFocus::Submit.text_field(), None);
        }
    }

    mod app_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_state_has_empty_form_and_no_toast() {
            let state = AppState::default();
            assert!(state.form.errors().is_empty());
            assert!(state.toast.is_none());
            assert_eq!(state.focus, FormFocus::FirstName);
        }

        #[test]
        fn test_expire_toast_drops_dismissed_toast() {
            let mut state = AppState::default();
            let mut toast = Toast::new("ref".to_string());
            toast.dismiss();
            state.toast = Some(toast);

            state.expire_toast();

            assert!(state.toast.is_none());
        }

        #[test]
        fn test_expire_toast_keeps_fresh_toast() {
            let mut state = AppState::default();
            state.toast = Some(Toast::new("ref".to_string()));

            state.expire_toast();

            assert!(state.toast.is_some());
        }
    }
}
