//! Vital signs check
//!
//! Readings are compared against fixed normal ranges; anything outside one
//! is reported as an anomaly.

use egui::{Color32, DragValue, RichText};
use std::ops::RangeInclusive;

pub const ANOMALY_DETECTED: &str = "Anomaly Detected! Please consult a medical professional.";
pub const VITALS_NORMAL: &str = "Your vitals appear normal.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vital {
    HeartRate,
    Spo2,
    Temperature,
}

impl Vital {
    pub fn label(self) -> &'static str {
        match self {
            Vital::HeartRate => "Heart Rate",
            Vital::Spo2 => "SpO2",
            Vital::Temperature => "Temperature",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Vital::HeartRate => "bpm",
            Vital::Spo2 => "%",
            Vital::Temperature => "°C",
        }
    }

    /// Values the input accepts
    fn input_range(self) -> RangeInclusive<f64> {
        match self {
            Vital::HeartRate => 40.0..=200.0,
            Vital::Spo2 => 70.0..=100.0,
            Vital::Temperature => 30.0..=43.0,
        }
    }

    pub fn normal_range(self) -> RangeInclusive<f64> {
        match self {
            Vital::HeartRate => 60.0..=100.0,
            Vital::Spo2 => 95.0..=100.0,
            Vital::Temperature => 36.2..=37.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    pub heart_rate: f64,
    pub spo2: f64,
    pub temperature: f64,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            heart_rate: 75.0,
            spo2: 98.0,
            temperature: 36.8,
        }
    }
}

impl Vitals {
    pub fn get(&self, vital: Vital) -> f64 {
        match vital {
            Vital::HeartRate => self.heart_rate,
            Vital::Spo2 => self.spo2,
            Vital::Temperature => self.temperature,
        }
    }

    fn get_mut(&mut self, vital: Vital) -> &mut f64 {
        match vital {
            Vital::HeartRate => &mut self.heart_rate,
            Vital::Spo2 => &mut self.spo2,
            Vital::Temperature => &mut self.temperature,
        }
    }

    pub fn assess(&self) -> Assessment {
        let out_of_range = [Vital::HeartRate, Vital::Spo2, Vital::Temperature]
            .into_iter()
            .filter(|&vital| !vital.normal_range().contains(&self.get(vital)))
            .collect();

        Assessment { out_of_range }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub out_of_range: Vec<Vital>,
}

impl Assessment {
    pub fn is_normal(&self) -> bool {
        self.out_of_range.is_empty()
    }

    pub fn verdict(&self) -> &'static str {
        if self.is_normal() {
            VITALS_NORMAL
        } else {
            ANOMALY_DETECTED
        }
    }
}

#[derive(Debug, Default)]
pub struct HealthMonitorView {
    vitals: Vitals,
    assessment: Option<Assessment>,
}

impl HealthMonitorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Health Monitor");
        ui.label("Enter your current vital signs.");
        ui.add_space(10.0);

        for (vital, speed) in [
            (Vital::HeartRate, 1.0),
            (Vital::Spo2, 1.0),
            (Vital::Temperature, 0.1),
        ] {
            ui.horizontal(|ui| {
                ui.label(format!("{} ({}):", vital.label(), vital.unit()));
                ui.add(
                    DragValue::new(self.vitals.get_mut(vital))
                        .range(vital.input_range())
                        .speed(speed),
                );
            });
        }

        ui.add_space(10.0);

        if ui.button("Check Vitals").clicked() {
            let assessment = self.vitals.assess();
            tracing::info!("Vitals checked, {} out of range", assessment.out_of_range.len());
            self.assessment = Some(assessment);
        }

        if let Some(assessment) = &self.assessment {
            let color = if assessment.is_normal() {
                Color32::DARK_GREEN
            } else {
                Color32::RED
            };
            ui.label(RichText::new(assessment.verdict()).color(color).strong());

            for &vital in &assessment.out_of_range {
                let normal = vital.normal_range();
                ui.label(format!(
                    "{} {} {} is outside {}-{} {}",
                    vital.label(),
                    self.vitals.get(vital),
                    vital.unit(),
                    normal.start(),
                    normal.end(),
                    vital.unit()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vitals_are_normal() {
        let assessment = Vitals::default().assess();
        assert!(assessment.is_normal());
        assert_eq!(assessment.verdict(), VITALS_NORMAL);
    }

    #[test]
    fn test_out_of_range_readings_are_reported() {
        let vitals = Vitals {
            heart_rate: 130.0,
            spo2: 98.0,
            temperature: 38.5,
        };

        let assessment = vitals.assess();
        assert_eq!(
            assessment.out_of_range,
            vec![Vital::HeartRate, Vital::Temperature]
        );
        assert_eq!(assessment.verdict(), ANOMALY_DETECTED);
    }

    #[test]
    fn test_range_bounds_are_normal() {
        let low = Vitals {
            heart_rate: 60.0,
            spo2: 95.0,
            temperature: 36.2,
        };
        let high = Vitals {
            heart_rate: 100.0,
            spo2: 100.0,
            temperature: 37.2,
        };
        assert!(low.assess().is_normal());
        assert!(high.assess().is_normal());

        let hypoxic = Vitals { spo2: 94.0, ..low };
        assert_eq!(hypoxic.assess().out_of_range, vec![Vital::Spo2]);
    }

    #[test]
    fn test_normal_ranges_fit_inside_input_ranges() {
        for vital in [Vital::HeartRate, Vital::Spo2, Vital::Temperature] {
            let (input, normal) = (vital.input_range(), vital.normal_range());
            assert!(input.contains(normal.start()) && input.contains(normal.end()));
        }
    }
}
