//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du simplificateur (entrée, résultat, erreur, démarche,
//! historique) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (HISTORIQUE_MAX), le plus récent en tête.

use std::collections::VecDeque;

/// Nombre maximal d’évaluations conservées.
pub const HISTORIQUE_MAX: usize = 20;

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub forme: String,
}

#[derive(Clone, Debug)]
pub struct AppSimplif {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // forme canonique
    pub erreur: String,   // sentinelle si l’entrée est invalide

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique (entrée, sortie) ---
    pub historique: VecDeque<(String, String)>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppSimplif {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            focus_entree: true,
        }
    }
}

impl AppSimplif {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Dépose un échec : on CONSERVE le dernier résultat, la démarche est effacée.
    pub fn set_erreur(&mut self, entree: &str, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        let erreur = self.erreur.clone();
        self.enregistre(entree, erreur);
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (forme canonique + démarche).
    pub fn set_resultats(&mut self, entree: &str, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        let resultat = self.resultat.clone();
        self.enregistre(entree, resultat);
        self.focus_entree = true;
    }

    /// Recharge une entrée de l’historique dans le champ de saisie.
    pub fn rappelle(&mut self, index: usize) {
        if let Some((entree, _)) = self.historique.get(index) {
            self.entree = entree.clone();
        }
        self.focus_entree = true;
    }

    fn enregistre(&mut self, entree: &str, sortie: String) {
        self.historique.push_front((entree.to_string(), sortie));
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
