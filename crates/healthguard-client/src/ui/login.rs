use egui::TextEdit;

use healthguard_protocol::{Credentials, UserData};

use crate::network::NetworkClient;
use crate::state::SessionState;

use super::auth_form::{AuthForm, AuthMode};

pub struct LoginView {
    form: AuthForm,
    auto_login: Option<Credentials>,
    auto_login_attempted: bool,
}

impl LoginView {
    pub fn new(auto_login: Option<Credentials>) -> Self {
        Self {
            form: AuthForm::new(),
            auto_login,
            auto_login_attempted: false,
        }
    }

    /// Check if auto-login should be attempted
    pub fn should_auto_login(&self) -> bool {
        !self.auto_login_attempted && self.auto_login.is_some()
    }

    /// Attempt one login with the configured credentials
    pub fn try_auto_login(
        &mut self,
        network: &NetworkClient,
        session: &SessionState,
        runtime: &tokio::runtime::Runtime,
    ) {
        self.auto_login_attempted = true;

        if let Some(credentials) = self.auto_login.take() {
            runtime.block_on(self.form.auto_login(network, session, &credentials));
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        network: &NetworkClient,
        session: &SessionState,
        runtime: &tokio::runtime::Runtime,
    ) {
        let (authenticated, user) = runtime.block_on(async {
            let state = session.read().await;
            (state.auth_token.is_some(), state.current_user.clone())
        });

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            ui.group(|ui| {
                ui.set_width(320.0);

                if authenticated {
                    self.show_authenticated(ui, user.as_ref(), network, session, runtime);
                } else {
                    self.show_form(ui, network, session, runtime);
                }

                if let Some(message) = self.form.message() {
                    ui.add_space(10.0);
                    ui.label(message);
                }
            });
        });
    }

    fn show_form(
        &mut self,
        ui: &mut egui::Ui,
        network: &NetworkClient,
        session: &SessionState,
        runtime: &tokio::runtime::Runtime,
    ) {
        let mode = self.form.mode();
        ui.heading(mode.title());
        ui.add_space(10.0);

        if mode == AuthMode::Signup {
            ui.horizontal(|ui| {
                ui.label("Username:");
                ui.text_edit_singleline(&mut self.form.fields.username);
            });
        }

        ui.horizontal(|ui| {
            ui.label("Email:");
            ui.text_edit_singleline(&mut self.form.fields.email);
        });

        ui.horizontal(|ui| {
            ui.label("Password:");
            ui.add(TextEdit::singleline(&mut self.form.fields.password).password(true));
        });

        if mode == AuthMode::Signup {
            ui.horizontal(|ui| {
                ui.label("Confirm Password:");
                ui.add(
                    TextEdit::singleline(&mut self.form.fields.confirm_password).password(true),
                );
            });
        }

        ui.add_space(10.0);

        if ui.button(mode.title()).clicked() {
            runtime.block_on(self.form.submit(network, session));
        }

        ui.add_space(5.0);

        if ui.link(mode.toggle_label()).clicked() {
            self.form.toggle_mode();
        }
    }

    fn show_authenticated(
        &mut self,
        ui: &mut egui::Ui,
        user: Option<&UserData>,
        network: &NetworkClient,
        session: &SessionState,
        runtime: &tokio::runtime::Runtime,
    ) {
        let username = user.and_then(|u| u.username.as_deref()).unwrap_or_default();
        ui.heading(format!("Welcome, {}!", username));

        if let Some(email) = user.and_then(|u| u.email.as_deref()) {
            ui.label(format!("Email: {}", email));
        }

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("Get Protected Data").clicked() {
                runtime.block_on(self.form.fetch_protected(network, session));
            }

            if ui.button("Logout").clicked() {
                runtime.block_on(self.form.logout(session));
            }
        });
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new(None)
    }
}
