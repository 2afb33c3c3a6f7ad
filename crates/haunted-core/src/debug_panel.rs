//! Debug sliders bound straight to light parameters.
//!
//! Each slider writes into a field of [`Lights`]; the panel itself holds no
//! copy of the values. Hosts translate key presses with
//! [`PanelCommand::from_key`] and feed them to [`DebugPanel::apply`].

use crate::error::SceneError;
use crate::lighting::Lights;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightParam {
    AmbientIntensity,
    MoonIntensity,
    MoonX,
    MoonY,
    MoonZ,
}

impl LightParam {
    pub fn read(self, lights: &Lights) -> f32 {
        match self {
            LightParam::AmbientIntensity => lights.ambient.intensity,
            LightParam::MoonIntensity => lights.moon.intensity,
            LightParam::MoonX => lights.moon.position.x,
            LightParam::MoonY => lights.moon.position.y,
            LightParam::MoonZ => lights.moon.position.z,
        }
    }

    fn write(self, lights: &mut Lights, value: f32) {
        match self {
            LightParam::AmbientIntensity => lights.ambient.intensity = value,
            LightParam::MoonIntensity => lights.moon.intensity = value,
            LightParam::MoonX => lights.moon.position.x = value,
            LightParam::MoonY => lights.moon.position.y = value,
            LightParam::MoonZ => lights.moon.position.z = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub param: LightParam,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Slider {
    pub const fn new(label: &'static str, param: LightParam, min: f32, max: f32, step: f32) -> Self {
        Self {
            label,
            param,
            min,
            max,
            step,
        }
    }

    /// Round to the nearest step, then clamp into range.
    pub fn constrain(&self, value: f32) -> f32 {
        let step = self.step as f64;
        let snapped = if step > 0.0 {
            ((value as f64 / step).round() * step) as f32
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelCommand {
    Select(usize),
    Nudge(i32),
    ToggleVisible,
}

impl PanelCommand {
    /// Map a `KeyboardEvent.key`-style name to a panel command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(PanelCommand::Select(0)),
            "2" => Some(PanelCommand::Select(1)),
            "3" => Some(PanelCommand::Select(2)),
            "4" => Some(PanelCommand::Select(3)),
            "5" => Some(PanelCommand::Select(4)),
            "ArrowUp" => Some(PanelCommand::Nudge(10)),
            "ArrowDown" => Some(PanelCommand::Nudge(-10)),
            "PageUp" => Some(PanelCommand::Nudge(100)),
            "PageDown" => Some(PanelCommand::Nudge(-100)),
            "h" | "H" => Some(PanelCommand::ToggleVisible),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DebugPanel {
    pub sliders: Vec<Slider>,
    pub selected: usize,
    pub visible: bool,
}

impl Default for DebugPanel {
    fn default() -> Self {
        Self::haunted_house()
    }
}

impl DebugPanel {
    pub fn haunted_house() -> Self {
        Self {
            sliders: vec![
                Slider::new("ambient intensity", LightParam::AmbientIntensity, 0.0, 1.0, 0.001),
                Slider::new("moon intensity", LightParam::MoonIntensity, 0.0, 1.0, 0.001),
                Slider::new("moon x", LightParam::MoonX, -5.0, 5.0, 0.001),
                Slider::new("moon y", LightParam::MoonY, -5.0, 5.0, 0.001),
                Slider::new("moon z", LightParam::MoonZ, -5.0, 5.0, 0.001),
            ],
            selected: 0,
            visible: true,
        }
    }

    pub fn slider(&self, label: &str) -> Result<&Slider, SceneError> {
        self.sliders
            .iter()
            .find(|s| s.label == label)
            .ok_or_else(|| SceneError::UnknownSlider(label.to_string()))
    }

    pub fn selected_slider(&self) -> Option<&Slider> {
        self.sliders.get(self.selected)
    }

    /// Set the slider called `label`, returning the value actually written.
    pub fn set(&self, lights: &mut Lights, label: &str, value: f32) -> Result<f32, SceneError> {
        let slider = self.slider(label)?;
        let applied = slider.constrain(value);
        slider.param.write(lights, applied);
        Ok(applied)
    }

    /// Move the selected slider by `steps` increments.
    pub fn nudge(&self, lights: &mut Lights, steps: i32) -> Option<f32> {
        let slider = self.selected_slider()?;
        let current = slider.param.read(lights);
        let applied = slider.constrain(current + steps as f32 * slider.step);
        slider.param.write(lights, applied);
        Some(applied)
    }

    /// Apply a key command. Returns true when something changed.
    pub fn apply(&mut self, lights: &mut Lights, command: PanelCommand) -> bool {
        match command {
            PanelCommand::Select(i) if i < self.sliders.len() => {
                self.selected = i;
                true
            }
            PanelCommand::Select(_) => false,
            PanelCommand::Nudge(steps) => match self.nudge(lights, steps) {
                Some(v) => {
                    if let Some(s) = self.selected_slider() {
                        log::info!("[panel] {} = {:.3}", s.label, v);
                    }
                    true
                }
                None => false,
            },
            PanelCommand::ToggleVisible => {
                self.visible = !self.visible;
                true
            }
        }
    }

    /// One line per slider, the selected one marked with `>`.
    pub fn lines(&self, lights: &Lights) -> Vec<String> {
        self.sliders
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let marker = if i == self.selected { '>' } else { ' ' };
                format!("{marker} {} {:<18} {:>7.3}", i + 1, s.label, s.param.read(lights))
            })
            .collect()
    }
}
