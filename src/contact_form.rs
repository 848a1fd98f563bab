use std::collections::BTreeMap;

use crate::content::FormField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            FormStatus::Loading => "Sending...",
            FormStatus::Success => "Request Sent!",
            FormStatus::Idle | FormStatus::Error => "Submit Request",
        }
    }
}

/// Contact form values plus the simulated submission state.
///
/// Submitting moves to `Loading`; the host resolves it after its delay with a
/// random roll. Nothing here talks to a network.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    status: FormStatus,
    values: BTreeMap<String, String>,
    failure_rate: f64,
}

impl ContactForm {
    pub fn new(fields: &[FormField], failure_rate: f64) -> Self {
        Self {
            status: FormStatus::Idle,
            values: fields.iter().map(|f| (f.name.clone(), String::new())).collect(),
            failure_rate,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    /// Unknown field names are ignored.
    pub fn set_value(&mut self, field: &str, value: String) {
        if let Some(slot) = self.values.get_mut(field) {
            *slot = value;
        }
    }

    /// Starts a submission. Returns `false`, changing nothing, while one is
    /// already in flight.
    pub fn submit(&mut self) -> bool {
        if self.status == FormStatus::Loading {
            return false;
        }
        self.status = FormStatus::Loading;
        true
    }

    /// Settles the submission in flight with `roll` drawn from `[0, 1)`.
    ///
    /// Rolls above the failure rate succeed and clear every field; the rest
    /// fail and keep what the user typed. Ignored unless loading.
    pub fn resolve(&mut self, roll: f64) -> FormStatus {
        if self.status != FormStatus::Loading {
            return self.status;
        }
        if roll > self.failure_rate {
            self.status = FormStatus::Success;
            self.values.values_mut().for_each(String::clear);
        } else {
            self.status = FormStatus::Error;
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::InputKind;

    fn fields() -> Vec<FormField> {
        [("name", InputKind::Text), ("email", InputKind::Email), ("message", InputKind::TextArea)]
            .into_iter()
            .map(|(name, kind)| FormField {
                name: name.to_string(),
                label: name.to_string(),
                kind,
                placeholder: None,
            })
            .collect()
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(&fields(), 0.2);
        form.set_value("name", "Ada".to_string());
        form.set_value("email", "ada@example.com".to_string());
        form.set_value("message", "New site please".to_string());
        form
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        assert!(form.submit());
        assert_eq!(form.status(), FormStatus::Loading);
        assert_eq!(form.resolve(0.9), FormStatus::Success);
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("email"), "");
        assert_eq!(form.value("message"), "");
    }

    #[test]
    fn error_keeps_fields() {
        let mut form = filled();
        form.submit();
        assert_eq!(form.resolve(0.1), FormStatus::Error);
        assert_eq!(form.value("name"), "Ada");
        assert_eq!(form.value("message"), "New site please");
    }

    #[test]
    fn failure_boundary_is_inclusive() {
        let mut form = filled();
        form.submit();
        assert_eq!(form.resolve(0.2), FormStatus::Error);
    }

    #[test]
    fn submit_while_loading_is_a_no_op() {
        let mut form = filled();
        assert!(form.submit());
        assert!(!form.submit());
        assert_eq!(form.status(), FormStatus::Loading);
    }

    #[test]
    fn resubmitting_after_error_reenters_loading() {
        let mut form = filled();
        form.submit();
        form.resolve(0.0);
        assert!(form.submit());
        assert_eq!(form.status(), FormStatus::Loading);
        assert_eq!(form.resolve(0.5), FormStatus::Success);
        assert!(form.submit());
    }

    #[test]
    fn resolve_without_submission_changes_nothing() {
        let mut form = filled();
        assert_eq!(form.resolve(0.9), FormStatus::Idle);
        assert_eq!(form.value("name"), "Ada");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = ContactForm::new(&fields(), 0.2);
        form.set_value("fax", "123".to_string());
        assert_eq!(form.value("fax"), "");
    }

    #[test]
    fn button_label_follows_status() {
        assert_eq!(FormStatus::Idle.button_label(), "Submit Request");
        assert_eq!(FormStatus::Loading.button_label(), "Sending...");
        assert_eq!(FormStatus::Success.button_label(), "Request Sent!");
        assert_eq!(FormStatus::Error.button_label(), "Submit Request");
    }
}
