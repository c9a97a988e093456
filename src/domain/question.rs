use serde::{Deserialize, Serialize};

/// Subject areas questions are grouped under. Closed set: a record whose
/// area is not one of these cannot exist in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
  Civil,
  Penal,
  Constitucional,
  ProcessoCivil,
  ProcessoPenal,
  Etica,
}

/// All areas, in the order they appear on the start page.
pub const AREAS: [Area; 6] = [
  Area::Civil,
  Area::Penal,
  Area::Constitucional,
  Area::ProcessoCivil,
  Area::ProcessoPenal,
  Area::Etica,
];

impl Area {
  /// Parse an area label. The query is trimmed first so upstream
  /// data-entry whitespace does not make an area unreachable.
  pub fn from_str(s: &str) -> Option<Self> {
    match s.trim() {
      "Direito Civil" => Some(Self::Civil),
      "Direito Penal" => Some(Self::Penal),
      "Direito Constitucional" => Some(Self::Constitucional),
      "Processo Civil" => Some(Self::ProcessoCivil),
      "Processo Penal" => Some(Self::ProcessoPenal),
      "Ética" => Some(Self::Etica),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Civil => "Direito Civil",
      Self::Penal => "Direito Penal",
      Self::Constitucional => "Direito Constitucional",
      Self::ProcessoCivil => "Processo Civil",
      Self::ProcessoPenal => "Processo Penal",
      Self::Etica => "Ética",
    }
  }
}

/// One multiple-choice question. Immutable once the bank is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
  pub id: u32,
  pub area: Area,
  pub prompt: String,
  /// Ordered answer choices; the order is meaningful (index-addressed).
  pub options: Vec<String>,
  /// Index into `options` of the correct choice.
  pub answer: usize,
  /// Shown after answering; may be empty.
  pub explanation: String,
  /// Informational label, no effect on sampling or scoring.
  pub difficulty: Option<String>,
  /// Informational tags, no effect on sampling or scoring.
  pub tags: Vec<String>,
}
