// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), Echap efface
// - Tactile : boutons, focus redonné après clic (focus_entree)
// - Erreurs : notification passagère en bas de fenêtre (pas de zone fixe)

use std::time::Duration;

use eframe::egui;

use super::etat::AppCalc;
use calculatrice_f64::noyau::FONCTIONS;

/// Pavé numérique ; la ligne du séparateur et celle de "=" sont posées à part.
const PAVE: [[&str; 4]; 3] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice f64");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_touches(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // Ligne “précédent” : la dernière expression soumise
        let precedent = egui::RichText::new(&self.precedent).monospace().weak();
        ui.add(egui::Label::new(precedent).truncate());

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 + 3*4, sin(90), (1 - 0.5) ^ 2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue ---
        // Un TextEdit mono-ligne rend le focus sur Enter : on accepte les deux cas.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (resp.has_focus() || resp.lost_focus()) {
            let maintenant = ui.input(|i| i.time);
            self.soumettre(maintenant);
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let c = ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement l’entrée");
            if c.clicked() {
                self.clear_entree();
            }

            ui.separator();

            ui.label("Séparateur :");
            let maintenant = ui.input(|i| i.time);
            for sep in ['.', ','] {
                let actif = self.reglages.separateur() == sep;
                if ui.selectable_label(actif, sep.to_string()).clicked() && !actif {
                    self.set_separateur(sep, maintenant);
                }
            }
        });
    }

    fn ui_touches(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(");
            self.bouton_insert(ui, ")", ")");

            ui.separator();

            for (nom, _) in FONCTIONS {
                self.bouton_insert(ui, nom, &format!("{nom}("));
            }
        });

        ui.add_space(8.0);

        let separateur = self.reglages.separateur().to_string();

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for t in ligne {
                        self.bouton_insert(ui, t, t);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, &separateur, &separateur);
                self.bouton_insert(ui, "%", "%");
                self.bouton_insert(ui, "+", "+");
                ui.end_row();

                self.bouton_insert(ui, "^", "^");
                ui.label("");
                ui.label("");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    let maintenant = ui.input(|i| i.time);
                    self.soumettre(maintenant);
                }
                ui.end_row();
            });
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Notification passagère (équivalent “toast”), au-dessus du panneau central.
    pub fn ui_notification(&mut self, ctx: &egui::Context) {
        let maintenant = ctx.input(|i| i.time);
        let Some(message) = self.notification_active(maintenant).map(str::to_owned) else {
            return;
        };

        egui::Area::new(egui::Id::new("notification"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(ui.visuals().error_fg_color, message);
                });
            });

        // redessiner à l’expiration, même sans entrée utilisateur
        let reste = self
            .notification
            .as_ref()
            .map_or(0.0, |n| (n.expire - maintenant).max(0.0));
        ctx.request_repaint_after(Duration::from_secs_f64(reste));
    }
}
