//! Localized narrative and label tables, keyed by language.
//!
//! English is the required fallback: any entry left empty in another
//! language resolves to the English text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Nl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Nl];

    pub const FALLBACK: Language = Language::En;

    /// Parse a locale code such as `fr`, `FR` or `nl-BE`. Returns `None` for
    /// unsupported locales so the caller can apply its own default.
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Nl => "nl",
        }
    }

    fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Keyed texts that are not tied to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    CopayNone,
    CopayReducedTier,
    NotePriorAuthorization,
    NoteAccident,
    NoteReducedTier,
    DeclarationReference,
    BackNavigation,
}

// Columns follow `Language::ALL`.
const STEP_MESSAGES: [[&str; 3]; 7] = [
    [
        "Welcome. This assistant guides you through declaring a hospital admission.",
        "Bienvenue. Cet assistant vous guide dans la déclaration d'une hospitalisation.",
        "Welkom. Deze assistent begeleidt u bij het aangeven van een ziekenhuisopname.",
    ],
    [
        "Who is being admitted? Enter the member's name and, if known, their member number.",
        "Qui est hospitalisé ? Indiquez le nom du membre et, si vous le connaissez, son numéro.",
        "Wie wordt opgenomen? Vul de naam van het lid in en, indien gekend, het lidnummer.",
    ],
    [
        "Choose the hospital from the list, or select \"other\" and type its name and city.",
        "Choisissez l'hôpital dans la liste, ou sélectionnez « autre » et indiquez son nom et sa ville.",
        "Kies het ziekenhuis uit de lijst, of selecteer \"ander\" en vul naam en gemeente in.",
    ],
    [
        "Enter the admission date and the reason for the stay. Tell us if it follows an accident.",
        "Indiquez la date d'admission et le motif du séjour. Précisez s'il s'agit d'un accident.",
        "Vul de opnamedatum en de reden van het verblijf in. Geef aan of het om een ongeval gaat.",
    ],
    [
        "Which room type is requested: shared room, single room or day hospital?",
        "Quel type de chambre est demandé : chambre commune, chambre particulière ou hôpital de jour ?",
        "Welk kamertype wordt gevraagd: gedeelde kamer, eenpersoonskamer of daghospitaal?",
    ],
    [
        "Please review the declaration before submitting it.",
        "Veuillez vérifier la déclaration avant de l'envoyer.",
        "Controleer de aangifte voordat u ze verstuurt.",
    ],
    [
        "Your declaration has been submitted. The coverage summary is shown below.",
        "Votre déclaration a été envoyée. Le résumé de la couverture est affiché ci-dessous.",
        "Uw aangifte is verstuurd. Het overzicht van de dekking staat hieronder.",
    ],
];

fn text_row(text: Text) -> [&'static str; 3] {
    match text {
        Text::CopayNone => [
            "No co-payment expected.",
            "Aucune quote-part à prévoir.",
            "Geen remgeld te verwachten.",
        ],
        Text::CopayReducedTier => [
            "25% personal share plus single-room supplements.",
            "Quote-part de 25 % plus suppléments de chambre particulière.",
            "Persoonlijk aandeel van 25% plus supplementen voor een eenpersoonskamer.",
        ],
        Text::NotePriorAuthorization => [
            "This admission requires prior authorization from the insurer.",
            "Cette admission nécessite un accord préalable de l'assureur.",
            "Voor deze opname is een voorafgaand akkoord van de verzekeraar nodig.",
        ],
        Text::NoteAccident => [
            "Attach the accident report; a third party may be liable for the costs.",
            "Joignez le constat d'accident ; un tiers pourrait être responsable des frais.",
            "Voeg de ongevalsaangifte toe; een derde kan aansprakelijk zijn voor de kosten.",
        ],
        Text::NoteReducedTier => [
            "Single-room supplements are only partially reimbursed.",
            "Les suppléments de chambre particulière ne sont que partiellement remboursés.",
            "Supplementen voor een eenpersoonskamer worden slechts gedeeltelijk terugbetaald.",
        ],
        Text::DeclarationReference => [
            "Declaration reference",
            "Référence de la déclaration",
            "",
        ],
        Text::BackNavigation => [
            "Going back to the previous step.",
            "Retour à l'étape précédente.",
            "Terug naar de vorige stap.",
        ],
    }
}

fn with_fallback(row: [&'static str; 3], language: Language) -> &'static str {
    let text = row[language.column()];
    if text.is_empty() {
        row[Language::FALLBACK.column()]
    } else {
        text
    }
}

/// Narrative shown when `step` is the step to display next.
pub fn step_message(language: Language, step: Step) -> &'static str {
    with_fallback(STEP_MESSAGES[step.index()], language)
}

pub fn text(language: Language, text: Text) -> &'static str {
    with_fallback(text_row(text), language)
}
