use chrono::Utc;
use egui::{Color32, ComboBox, RichText, TextEdit};
use std::sync::Arc;
use thiserror::Error;

use crate::state::{ConsultationLog, ConsultationRequest, Urgency};

pub const REQUEST_SUBMITTED: &str =
    "Your request has been submitted. A doctor will contact you soon.";

pub struct Doctor {
    pub name: &'static str,
    pub phone: Option<&'static str>,
    pub email: &'static str,
    pub availability: Option<&'static str>,
}

pub const DOCTORS: [Doctor; 2] = [
    Doctor {
        name: "Dr. Tony Wabuko",
        phone: Some("0799104517"),
        email: "tonywabuko@gmail.com",
        availability: None,
    },
    Doctor {
        name: "Dr. Brian Sangura",
        phone: None,
        email: "sangura.bren@gmail.com",
        availability: Some("Mon - Fri, 9AM to 5PM"),
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill out all fields.")]
    MissingFields,

    #[error("Could not save your request: {0}")]
    Storage(String),
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub urgency: Urgency,
    outcome: Option<Result<(), ContactError>>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> Option<&Result<(), ContactError>> {
        self.outcome.as_ref()
    }

    /// Build the request to record, or fail if a field is blank
    pub fn request(&self) -> Result<ConsultationRequest, ContactError> {
        let (name, email, message) = (self.name.trim(), self.email.trim(), self.message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        Ok(ConsultationRequest {
            name: name.to_string(),
            email: email.to_string(),
            urgency: self.urgency,
            message: message.to_string(),
            submitted_at: Utc::now(),
        })
    }

    /// Record the request. Fields are cleared only once it is saved.
    pub fn submit(&mut self, log: &dyn ConsultationLog) {
        let result = self.request().and_then(|request| {
            log.append(request).map_err(|e| {
                tracing::error!("Failed to record consultation request: {}", e);
                ContactError::Storage(e.to_string())
            })
        });

        if result.is_ok() {
            tracing::info!("Consultation request submitted ({})", self.urgency.label());
            *self = Self {
                outcome: Some(Ok(())),
                ..Self::default()
            };
        } else {
            self.outcome = Some(result);
        }
    }
}

pub struct ContactDoctorView {
    form: ContactForm,
    log: Arc<dyn ConsultationLog>,
}

impl ContactDoctorView {
    pub fn new(log: Arc<dyn ConsultationLog>) -> Self {
        Self {
            form: ContactForm::new(),
            log,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Contact a Doctor");
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            self.show_form(&mut columns[0]);
            show_directory(&mut columns[1]);
        });
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.strong("Request a Consultation");

        ui.horizontal(|ui| {
            ui.label("Your Name:");
            ui.text_edit_singleline(&mut self.form.name);
        });

        ui.horizontal(|ui| {
            ui.label("Your Email:");
            ui.text_edit_singleline(&mut self.form.email);
        });

        ComboBox::from_label("Urgency Level")
            .selected_text(self.form.urgency.label())
            .show_ui(ui, |ui| {
                for urgency in Urgency::ALL {
                    ui.selectable_value(&mut self.form.urgency, urgency, urgency.label());
                }
            });

        ui.label("Describe your symptoms or concerns:");
        ui.add(TextEdit::multiline(&mut self.form.message).desired_rows(5));

        if ui.button("Submit Request").clicked() {
            self.form.submit(self.log.as_ref());
        }

        match self.form.outcome() {
            Some(Ok(())) => {
                ui.label(RichText::new(REQUEST_SUBMITTED).color(Color32::DARK_GREEN));
            }
            Some(Err(e)) => {
                ui.label(RichText::new(e.to_string()).color(Color32::RED));
            }
            None => {}
        }
    }
}

fn show_directory(ui: &mut egui::Ui) {
    ui.strong("Doctor Directory");

    for doctor in &DOCTORS {
        ui.group(|ui| {
            ui.label(RichText::new(doctor.name).strong());
            if let Some(phone) = doctor.phone {
                ui.label(format!("Phone: {}", phone));
            }
            ui.label(format!("Email: {}", doctor.email));
            if let Some(availability) = doctor.availability {
                ui.label(format!("Available: {}", availability));
            }
        });
    }

    ui.add_space(10.0);
    ui.small(
        "Your information is shared only with the doctor handling your request \
         and is used solely to respond to it.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MemoryConsultationLog, StorageError};

    fn filled() -> ContactForm {
        ContactForm {
            name: " Ann ".to_string(),
            email: "ann@example.com".to_string(),
            message: "Chest pain after exercise".to_string(),
            urgency: Urgency::Urgent,
            ..ContactForm::default()
        }
    }

    struct UnwritableLog;

    impl ConsultationLog for UnwritableLog {
        fn append(&self, _request: ConsultationRequest) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "consultations.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }

        fn entries(&self) -> Vec<ConsultationRequest> {
            Vec::new()
        }
    }

    #[test]
    fn test_every_field_is_required() {
        for blank in ["name", "email", "message"] {
            let mut form = filled();
            match blank {
                "name" => form.name = "  ".to_string(),
                "email" => form.email.clear(),
                _ => form.message = "\n".to_string(),
            }
            assert_eq!(form.request(), Err(ContactError::MissingFields), "{blank}");
        }

        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill out all fields."
        );
    }

    #[test]
    fn test_submit_records_trimmed_request_and_clears_form() {
        let log = MemoryConsultationLog::new();
        let mut form = filled();

        form.submit(&log);

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Ann");
        assert_eq!(entries[0].urgency, Urgency::Urgent);
        assert_eq!(form.outcome(), Some(&Ok(())));
        assert!(form.name.is_empty() && form.message.is_empty());
        assert_eq!(form.urgency, Urgency::Routine);
    }

    #[test]
    fn test_incomplete_submit_records_nothing() {
        let log = MemoryConsultationLog::new();
        let mut form = filled();
        form.message.clear();

        form.submit(&log);

        assert!(log.entries().is_empty());
        assert_eq!(form.outcome(), Some(&Err(ContactError::MissingFields)));
        assert_eq!(form.name, " Ann ");
    }

    #[test]
    fn test_failed_save_keeps_fields() {
        let mut form = filled();

        form.submit(&UnwritableLog);

        assert!(matches!(form.outcome(), Some(Err(ContactError::Storage(_)))));
        assert_eq!(form.email, "ann@example.com");
    }
}
