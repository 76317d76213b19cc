use crate::adapters::share_link::{from_query, to_query};
use crate::controllers::viewport::controller::DisplayStatus;
use crate::core::colouring::kinds::PaletteKind;
use crate::core::data::shareable_state::ShareableState;
use crate::core::fractals::escape_time::HARD_ITERATION_CAP;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::viewport::events::FractalCommand;
use crate::core::viewport::state::{FractalState, MAX_ANIMATION_SPEED, MIN_ANIMATION_SPEED};

/// Text fields that outlive a single egui frame.
#[derive(Debug, Default)]
pub struct PanelState {
    share_input: String,
    share_error: Option<String>,
}

/// Draws the control panel and returns the commands the user issued this frame.
pub fn show_panel(
    ctx: &egui::Context,
    state: &FractalState,
    status: &DisplayStatus,
    panel: &mut PanelState,
) -> Vec<FractalCommand> {
    let mut commands = Vec::new();

    egui::Window::new("Fractal Zoomer")
        .default_pos([10.0, 10.0])
        .default_size([280.0, 320.0])
        .show(ctx, |ui| {
            ui.label(format!("Re: {:.15}", status.center.real));
            ui.label(format!("Im: {:.15}", status.center.imag));
            ui.label(format!("Zoom: {}", status.depth_label));
            ui.label(format!(
                "Iterations: {}   Precision: {}",
                status.max_iterations, status.precision
            ));
            ui.label(format!("FPS: {:.0}", status.fps));
            ui.separator();

            let mut palette = PaletteKind::from_index(state.colour_palette);
            egui::ComboBox::from_id_source("palette")
                .selected_text(palette.display_name())
                .show_ui(ui, |ui| {
                    for &kind in PaletteKind::ALL {
                        ui.selectable_value(&mut palette, kind, kind.display_name());
                    }
                });
            if palette.index() != state.colour_palette {
                commands.push(FractalCommand::SetPalette(palette.index()));
            }

            let mut max_iterations = state.max_iterations;
            ui.add(egui::Slider::new(&mut max_iterations, 1..=HARD_ITERATION_CAP).text("Iterations"));
            if max_iterations != state.max_iterations {
                commands.push(FractalCommand::SetMaxIterations(max_iterations));
            }

            let current = FractalKind::from_julia_flag(state.is_julia);
            let mut kind = current;
            ui.horizontal(|ui| {
                for &option in FractalKind::ALL {
                    ui.selectable_value(&mut kind, option, option.display_name());
                }
            });
            if kind != current {
                commands.push(FractalCommand::SetJulia(kind == FractalKind::Julia));
            }

            if state.is_julia {
                let mut julia_c = state.julia_c;
                ui.add(egui::Slider::new(&mut julia_c.real, -2.0..=2.0).text("c re"));
                ui.add(egui::Slider::new(&mut julia_c.imag, -2.0..=2.0).text("c im"));
                if julia_c != state.julia_c {
                    commands.push(FractalCommand::SetJuliaConstant(julia_c));
                }
            }

            let mut auto_zoom = state.auto_zoom;
            ui.checkbox(&mut auto_zoom, "Auto-zoom");
            if auto_zoom != state.auto_zoom {
                commands.push(FractalCommand::SetAutoZoom(auto_zoom));
            }

            let mut speed = state.animation_speed;
            ui.add(egui::Slider::new(&mut speed, MIN_ANIMATION_SPEED..=MAX_ANIMATION_SPEED).text("Speed"));
            if speed != state.animation_speed {
                commands.push(FractalCommand::SetAnimationSpeed(speed));
            }

            if ui.button("Reset view").clicked() {
                commands.push(FractalCommand::ResetView);
            }

            ui.separator();
            if ui.button("Copy share link").clicked() {
                match to_query(&ShareableState::from_state(state)) {
                    Ok(query) => ui.output_mut(|output| output.copied_text = query),
                    Err(error) => panel.share_error = Some(error.to_string()),
                }
            }

            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut panel.share_input);
                if ui.button("Open").clicked() {
                    match from_query(panel.share_input.trim()) {
                        Ok(shared) => {
                            panel.share_error = None;
                            commands.push(FractalCommand::ApplyShared(shared));
                        }
                        Err(error) => panel.share_error = Some(error.to_string()),
                    }
                }
            });
            if let Some(message) = &panel.share_error {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });

    commands
}
