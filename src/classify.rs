//! Keyword classifiers for free-text CRM fields.
//!
//! Each classifier lowercases its input and walks an ordered list of trigger
//! sets, first match wins. Order matters: some sets overlap (e.g. "asset
//! management" fires the EAM rule before the narrower APM rule is reached),
//! and the ordering is pinned by tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product solution inferred from activity details text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductLabel {
    EamApm,
    Apm,
    Etq,
    Ecosys,
    Scanner,
    CadWorx,
    CaesarII,
    J5Akms,
    Akms,
    NotApplicable,
}

impl ProductLabel {
    pub fn label(&self) -> &'static str {
        match self {
            ProductLabel::EamApm => "HxGN EAM/APM",
            ProductLabel::Apm => "HxGN APM",
            ProductLabel::Etq => "ETQ",
            ProductLabel::Ecosys => "Ecosys",
            ProductLabel::Scanner => "Scanner",
            ProductLabel::CadWorx => "CADWorx",
            ProductLabel::CaesarII => "CAESAR II",
            ProductLabel::J5Akms => "J5/AKMS",
            ProductLabel::Akms => "AKMS",
            ProductLabel::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for ProductLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized industry bucket used for email theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndustryCategory {
    Aerospace,
    Automotive,
    Energy,
    LifeSciences,
    FoodBev,
    Chemicals,
    Utilities,
    Mining,
    HiTech,
    Discrete,
    Other,
}

impl IndustryCategory {
    /// Human-readable form used inside generated email copy. Automotive has
    /// no dedicated reading and falls back to the generic one.
    pub fn label(&self) -> &'static str {
        match self {
            IndustryCategory::Discrete => "discrete manufacturing",
            IndustryCategory::Aerospace => "aerospace & defense",
            IndustryCategory::Energy => "energy / oil & gas",
            IndustryCategory::LifeSciences => "life sciences",
            IndustryCategory::FoodBev => "food & beverage",
            IndustryCategory::Chemicals => "chemicals",
            IndustryCategory::Utilities => "utilities",
            IndustryCategory::Mining => "mining & metals",
            IndustryCategory::HiTech => "electronics / high-tech",
            IndustryCategory::Automotive | IndustryCategory::Other => "your industry",
        }
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Buyer-role bucket inferred from a contact title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    Exec,
    Vp,
    Director,
    Quality,
    Maintenance,
    Projects,
    Operations,
    Engineering,
    Safety,
    It,
    Manager,
    Ic,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

pub fn classify_product(details: &str) -> ProductLabel {
    let d = details.trim().to_lowercase();
    let eam_triggers = [
        "eam",
        "asset management",
        "hxgn eam",
        "hxgn-eam",
        "enterprise-asset-management",
        "maintenance",
        "equipment management",
        "preventative maintenance",
        "asset data",
    ];
    if contains_any(&d, &eam_triggers) {
        return ProductLabel::EamApm;
    }
    if contains_any(&d, &["asset performance", "apm"]) {
        return ProductLabel::Apm;
    }
    if contains_any(&d, &["quality", "etq", "qms", "compliance"]) {
        return ProductLabel::Etq;
    }
    if contains_any(&d, &["project-management", "controls", "ecosys"]) {
        return ProductLabel::Ecosys;
    }
    if d.contains("measuring-machines") {
        return ProductLabel::Scanner;
    }
    if d.contains("cadworx") {
        return ProductLabel::CadWorx;
    }
    if d.contains("caesar") {
        return ProductLabel::CaesarII;
    }
    if contains_any(&d, &["productivity-and-efficiency", "digital transformation"]) {
        return ProductLabel::J5Akms;
    }
    if d.contains("acceleratorkms") {
        return ProductLabel::Akms;
    }
    ProductLabel::NotApplicable
}

/// Empty input defaults to Discrete while unmatched non-empty input maps to
/// Other. The asymmetry is intentional: discrete manufacturing is the modal
/// customer when the master list carries no industry at all.
pub fn classify_industry(text: &str) -> IndustryCategory {
    let s = text.trim().to_lowercase();
    if s.is_empty() {
        return IndustryCategory::Discrete;
    }
    if contains_any(&s, &["aerospace", "defense"]) {
        return IndustryCategory::Aerospace;
    }
    if contains_any(&s, &["automotive", "vehicle", "mobility"]) {
        return IndustryCategory::Automotive;
    }
    if contains_any(
        &s,
        &[
            "oil",
            "gas",
            "o&g",
            "energy",
            "upstream",
            "midstream",
            "downstream",
            "refining",
        ],
    ) {
        return IndustryCategory::Energy;
    }
    if contains_any(&s, &["life science", "pharma", "biotech", "medical"]) {
        return IndustryCategory::LifeSciences;
    }
    if contains_any(&s, &["food", "beverage", "f&b"]) {
        return IndustryCategory::FoodBev;
    }
    if contains_any(&s, &["chem", "petrochem"]) {
        return IndustryCategory::Chemicals;
    }
    if contains_any(
        &s,
        &[
            "utilities",
            "power",
            "generation",
            "transmission",
            "distribution",
        ],
    ) {
        return IndustryCategory::Utilities;
    }
    if contains_any(&s, &["mining", "metals"]) {
        return IndustryCategory::Mining;
    }
    if contains_any(
        &s,
        &["electronics", "semiconductor", "high-tech", "hi tech", "hitech"],
    ) {
        return IndustryCategory::HiTech;
    }
    if contains_any(&s, &["discrete", "machinery", "heavy", "industrial"]) {
        return IndustryCategory::Discrete;
    }
    IndustryCategory::Other
}

pub fn classify_role(title: &str) -> RoleCategory {
    let t = title.trim().to_lowercase();
    if contains_any(
        &t,
        &[
            "chief ", "cxo", "ceo", "cfo", "coo", "cio", "cto", "ciso", "president",
        ],
    ) {
        return RoleCategory::Exec;
    }
    if contains_any(&t, &["svp", "evp"]) {
        return RoleCategory::Exec;
    }
    if t.contains("vice president") || t.contains("vp") {
        return RoleCategory::Vp;
    }
    if t.contains("director") {
        return RoleCategory::Director;
    }
    if contains_any(&t, &["quality", "compliance", "qms", "regulatory"]) {
        return RoleCategory::Quality;
    }
    if contains_any(&t, &["maintenance", "reliability", "asset", "condition monitoring"]) {
        return RoleCategory::Maintenance;
    }
    if contains_any(
        &t,
        &["project controls", "project manager", "program manager", "pmo"],
    ) {
        return RoleCategory::Projects;
    }
    if contains_any(
        &t,
        &["operations", "manufacturing", "plant manager", "production"],
    ) {
        return RoleCategory::Operations;
    }
    if contains_any(&t, &["engineering", "design", "cad", "piping"]) {
        return RoleCategory::Engineering;
    }
    if contains_any(&t, &["ehs", "hse", "safety"]) {
        return RoleCategory::Safety;
    }
    if contains_any(
        &t,
        &[
            "it ",
            "ot ",
            "information technology",
            "industrial it",
            "systems",
            "data",
        ],
    ) {
        return RoleCategory::It;
    }
    if contains_any(&t, &["manager", "lead", "head"]) {
        return RoleCategory::Manager;
    }
    RoleCategory::Ic
}
