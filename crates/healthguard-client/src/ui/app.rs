use std::sync::Arc;

use crate::config::ClientConfig;
use crate::network::NetworkClient;
use crate::state::{
    ConsultationLog, FileConsultationLog, FileStorage, LocalStorage, MemoryConsultationLog,
    MemoryStorage, SessionState,
};

use super::contact_doctor::ContactDoctorView;
use super::health_monitor::HealthMonitorView;
use super::login::LoginView;
use super::page::{Page, PageShell};

pub struct HealthGuardApp {
    session: SessionState,
    network: NetworkClient,
    runtime: tokio::runtime::Runtime,
    shell: PageShell,
    login_view: LoginView,
    health_monitor: HealthMonitorView,
    contact_doctor: ContactDoctorView,
}

impl HealthGuardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> anyhow::Result<Self> {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        cc.egui_ctx.set_style(style);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let storage: Arc<dyn LocalStorage> = match config.storage_path() {
            Some(path) => {
                let storage = FileStorage::open(path);
                tracing::info!("Using local storage at {:?}", storage.path());
                Arc::new(storage)
            }
            None => {
                tracing::warn!("Could not determine config directory, session will not persist");
                Arc::new(MemoryStorage::new())
            }
        };

        let consultations: Arc<dyn ConsultationLog> = match config.consultations_path() {
            Some(path) => Arc::new(FileConsultationLog::open(path)),
            None => Arc::new(MemoryConsultationLog::new()),
        };

        let session = SessionState::load(storage);
        let network = NetworkClient::new(&config.api_url);
        tracing::info!("Using auth API at {}", network.base_url());

        // A restored session takes precedence over configured credentials
        let restored = runtime.block_on(session.is_authenticated());
        let auto_login = if restored { None } else { config.auto_login() };

        Ok(Self {
            session,
            network,
            runtime,
            shell: PageShell::new(),
            login_view: LoginView::new(auto_login),
            health_monitor: HealthMonitorView::new(),
            contact_doctor: ContactDoctorView::new(consultations),
        })
    }
}

impl eframe::App for HealthGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.login_view.should_auto_login() {
            self.login_view
                .try_auto_login(&self.network, &self.session, &self.runtime);
        }

        self.shell.show(ctx);

        let page = self
            .shell
            .nav
            .active()
            .map_or(Page::Dashboard, |link| link.page);

        egui::CentralPanel::default().show(ctx, |ui| match page {
            Page::Dashboard => {
                self.login_view
                    .show(ui, &self.network, &self.session, &self.runtime)
            }
            Page::HealthMonitor => self.health_monitor.show(ui),
            Page::ContactDoctor => self.contact_doctor.show(ui),
        });
    }
}
