use egui::{Align, Button, Color32, Id, Layout, Modal, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    HealthMonitor,
    ContactDoctor,
}

impl Page {
    /// Navigation target name
    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::HealthMonitor => "health-monitor",
            Page::ContactDoctor => "contact-doctor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

/// Navigation bar with at most one active link, the last one clicked
#[derive(Debug)]
pub struct NavBar {
    links: Vec<NavLink>,
    active: Option<usize>,
}

impl NavBar {
    /// The first link starts out active
    pub fn new(links: Vec<NavLink>) -> Self {
        let active = if links.is_empty() { None } else { Some(0) };
        Self { links, active }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&NavLink> {
        self.active.and_then(|i| self.links.get(i))
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.active().is_some_and(|link| link.page.slug() == page)
    }

    /// Activate the link for `page`. Unknown pages leave the bar unchanged.
    pub fn click(&mut self, page: &str) -> bool {
        let Some(index) = self.links.iter().position(|link| link.page.slug() == page) else {
            return false;
        };

        self.active = Some(index);
        tracing::info!("Navigating to {}", page);
        true
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        for link in &self.links {
            let slug = link.page.slug();
            if ui.selectable_label(self.is_active(slug), link.label).clicked() {
                clicked = Some(slug);
            }
        }

        if let Some(page) = clicked {
            self.click(page);
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(vec![
            NavLink {
                label: "Dashboard",
                page: Page::Dashboard,
            },
            NavLink {
                label: "Health Monitor",
                page: Page::HealthMonitor,
            },
            NavLink {
                label: "Contact Doctor",
                page: Page::ContactDoctor,
            },
        ])
    }
}

/// Where a click relevant to the modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Trigger,
    CloseButton,
    Backdrop,
    Content,
}

#[derive(Debug, Default)]
pub struct EmergencyModal {
    open: bool,
}

impl EmergencyModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, click: ModalClick) {
        match click {
            ModalClick::Trigger => self.open = true,
            ModalClick::CloseButton | ModalClick::Backdrop => self.open = false,
            ModalClick::Content => {}
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = Modal::new(Id::new("emergency-modal")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.heading("Emergency");
            ui.add_space(8.0);
            ui.label(
                "If you are experiencing a medical emergency, call your local \
                 emergency number immediately.",
            );
            ui.add_space(8.0);
            ui.button("Close").clicked()
        });

        if modal.inner {
            self.handle(ModalClick::CloseButton);
        } else if modal.should_close() {
            self.handle(ModalClick::Backdrop);
        }
    }
}

/// Top bar: navigation links plus the emergency trigger
#[derive(Debug, Default)]
pub struct PageShell {
    pub nav: NavBar,
    pub modal: EmergencyModal,
}

impl PageShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("HealthGuard");
                ui.separator();
                self.nav.show(ui);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let button = Button::new(
                        RichText::new("Emergency").color(Color32::WHITE),
                    )
                    .fill(Color32::from_rgb(200, 40, 40));

                    if ui.add(button).clicked() {
                        self.modal.handle(ModalClick::Trigger);
                    }
                });
            });
        });

        self.modal.show(ctx);
    }
}
