mod app;
pub mod auth_form;
pub mod contact_doctor;
pub mod health_monitor;
mod login;
pub mod page;

pub use app::HealthGuardApp;
pub use auth_form::{AuthForm, AuthMode, FormData, FormError};
pub use contact_doctor::{ContactDoctorView, ContactForm};
pub use health_monitor::{HealthMonitorView, Vitals};
pub use login::LoginView;
pub use page::{EmergencyModal, ModalClick, NavBar, NavLink, Page, PageShell};
