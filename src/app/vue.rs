// src/app/vue.rs
//
// Vue (UI egui) — natif
// ---------------------
// Objectifs :
// - Clavier : Enter simplifie (quand le champ est focus)
// - Boutons : chiffres, x/y/z, opérateurs, parenthèses, "="
// - Focus redonné à l’entrée après chaque clic (focus_entree)
// - Toute entrée refusée affiche la même sentinelle

use eframe::egui;
use log::debug;

use simplif_xyz::noyau::{eval_expression, SENTINELLE_INVALIDE};

use super::etat::{AppSimplif, Demarche};

impl AppSimplif {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Simplificateur x/y/z");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 * (3 * x + 4 * y) - 7 * y + 9")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : seulement si le champ est focus (TextEdit singleline perd le focus sur Enter).
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", InsertKind::Op);
            self.bouton_insert(ui, "-", InsertKind::Op);
            self.bouton_insert(ui, "*", InsertKind::Op);

            ui.separator();

            self.bouton_insert(ui, "x", InsertKind::Var);
            self.bouton_insert(ui, "y", InsertKind::Var);
            self.bouton_insert(ui, "z", InsertKind::Var);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9", "0", "1"], ["2", "3", "4", "5", "6"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, InsertKind::Digit);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Forme canonique :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
                Self::champ_demarche(ui, "Forme", "demarche_forme", &self.demarche.forme);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("vide");
                    return;
                }

                let mut choisi = None;
                for (i, (entree, sortie)) in self.historique.iter().enumerate() {
                    if ui.link(format!("{entree}  =>  {sortie}")).clicked() {
                        choisi = Some(i);
                    }
                }
                if let Some(i) = choisi {
                    self.rappelle(i);
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }
        insere(&mut self.entree, texte, kind);
        self.focus_entree = true;
    }

    /// Simplifie via le noyau, puis dépose résultat/démarche dans l’état UI.
    /// Toute erreur (lexicale ou de syntaxe) devient la même sentinelle.
    fn eval_via_noyau(&mut self) {
        let entree = self.entree.clone();

        match eval_expression(&entree) {
            Ok((resultat, d_noyau)) => {
                let d_ui = Demarche {
                    jetons: d_noyau.jetons,
                    arbre: d_noyau.arbre,
                    forme: format!("{} monôme(s), degré {}", d_noyau.nb_monomes, d_noyau.degre),
                };
                self.set_resultats(&entree, resultat, d_ui);
            }
            Err(e) => {
                debug!("vue : {entree:?} refusée ({e})");
                self.set_erreur(&entree, SENTINELLE_INVALIDE);
            }
        }
    }
}

/// Insertion “propre” d’un bouton dans l’entrée (espaces autour des opérateurs).
fn insere(entree: &mut String, texte: &str, kind: InsertKind) {
    match kind {
        InsertKind::CloseParen => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            entree.push_str(texte);
        }
        InsertKind::OpenParen | InsertKind::Var => {
            // espace si juste avant c’est une valeur fermée (chiffre, variable, ')')
            let last = entree.chars().rev().find(|c| *c != ' ');
            if let Some(c) = last {
                if (c.is_ascii_alphanumeric() || c == ')') && !entree.ends_with(' ') {
                    entree.push(' ');
                }
            }
            entree.push_str(texte);
        }
        InsertKind::Op => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(texte);
            entree.push(' ');
        }
        InsertKind::Digit => {
            // chiffres: pas d’espaces auto
            entree.push_str(texte);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Var,
    Op,
    OpenParen,
    CloseParen,
}
