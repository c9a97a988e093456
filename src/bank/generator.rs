//! Template-based filler question generator.
//!
//! Pads the bank to a target size at startup. Each emitted record is a
//! template instance with a cosmetic prompt variation and a freshly
//! shuffled option order; the answer index is recomputed so the original
//! correct option stays correct. Never runs on the quiz hot path.

use rand::seq::{IndexedRandom, SliceRandom};

use crate::config;
use crate::domain::{Area, QuestionRecord};

struct QuestionTemplate {
  area: Area,
  prompt: &'static str,
  options: [&'static str; 4],
  answer: usize,
  explanation: &'static str,
  difficulty: &'static str,
  tags: &'static [&'static str],
}

const TEMPLATES: &[QuestionTemplate] = &[
  QuestionTemplate {
    area: Area::Penal,
    prompt: "A representação da vítima, nos crimes de ação pública condicionada, em regra, deve ocorrer em:",
    options: ["3 meses", "6 meses", "1 ano", "2 anos"],
    answer: 1,
    explanation: "Regra geral: prazo decadencial de 6 meses a contar do conhecimento da autoria.",
    difficulty: "basico",
    tags: &["ação penal", "representação"],
  },
  QuestionTemplate {
    area: Area::Penal,
    prompt: "O recebimento da denúncia ou queixa é marco que, em regra:",
    options: ["reduz a pena", "interrompe a prescrição", "extingue o processo", "anula o inquérito"],
    answer: 1,
    explanation: "Em geral, o recebimento da inicial acusatória é marco interruptivo da prescrição (CP).",
    difficulty: "basico",
    tags: &["prescrição", "marcos"],
  },
  QuestionTemplate {
    area: Area::Penal,
    prompt: "A decadência, quando aplicável, tem como efeito principal:",
    options: ["reduzir a pena", "extinguir a punibilidade", "aumentar a pena", "suspender o processo"],
    answer: 1,
    explanation: "Decadência do direito de queixa/representação extingue a punibilidade.",
    difficulty: "basico",
    tags: &["extinção da punibilidade", "decadência"],
  },
  QuestionTemplate {
    area: Area::Civil,
    prompt: "Em obrigações solidárias passivas, o credor pode exigir:",
    options: [
      "apenas parte da dívida",
      "apenas do devedor mais rico",
      "a totalidade de qualquer devedor",
      "somente após sentença",
    ],
    answer: 2,
    explanation: "Na solidariedade passiva, o credor pode cobrar integralmente de qualquer devedor.",
    difficulty: "basico",
    tags: &["obrigações", "solidariedade"],
  },
  QuestionTemplate {
    area: Area::Civil,
    prompt: "A mora do devedor ocorre, em regra, quando:",
    options: [
      "o credor perdoa a dívida",
      "não paga no tempo, lugar e forma devidos",
      "há contrato verbal",
      "existe fiador",
    ],
    answer: 1,
    explanation: "Mora é atraso culposo no cumprimento: tempo, lugar e forma convencionados.",
    difficulty: "basico",
    tags: &["mora", "inadimplemento"],
  },
  QuestionTemplate {
    area: Area::ProcessoCivil,
    prompt: "O princípio da cooperação no CPC impõe que:",
    options: [
      "apenas o juiz coopere",
      "todos atuem para decisão justa e efetiva",
      "o réu sempre confesse",
      "não haja contraditório",
    ],
    answer: 1,
    explanation: "CPC/2015 reforça cooperação entre sujeitos do processo para decisão justa.",
    difficulty: "basico",
    tags: &["princípios", "cooperação"],
  },
  QuestionTemplate {
    area: Area::ProcessoCivil,
    prompt: "O Incidente de Desconsideração da Personalidade Jurídica (IDPJ) assegura:",
    options: ["prisão civil", "contraditório e ampla defesa", "execução automática", "revelia do sócio"],
    answer: 1,
    explanation: "Arts. 133–137 do CPC: IDPJ garante contraditório e ampla defesa.",
    difficulty: "basico",
    tags: &["IDPJ", "art. 133-137"],
  },
  QuestionTemplate {
    area: Area::Constitucional,
    prompt: "Direitos fundamentais possuem, em regra, aplicabilidade:",
    options: ["somente após lei", "imediata", "somente em estados", "apenas programática"],
    answer: 1,
    explanation: "Art. 5º, §1º: normas definidoras têm aplicação imediata.",
    difficulty: "basico",
    tags: &["direitos fundamentais"],
  },
  QuestionTemplate {
    area: Area::Constitucional,
    prompt: "O controle difuso de constitucionalidade pode ser realizado por:",
    options: ["apenas STF", "qualquer juiz ou tribunal", "apenas Senado", "apenas Presidente"],
    answer: 1,
    explanation: "No controle difuso, qualquer órgão do Judiciário pode reconhecer inconstitucionalidade no caso concreto.",
    difficulty: "basico",
    tags: &["controle de constitucionalidade"],
  },
  QuestionTemplate {
    area: Area::Etica,
    prompt: "No exercício profissional, é eticamente adequado:",
    options: [
      "prometer resultado ao cliente",
      "guardar sigilo sobre informações sensíveis",
      "divulgar dados sem consentimento",
      "aceitar causa com conflito de interesse sem informar",
    ],
    answer: 1,
    explanation: "Sigilo e proteção de informações são pilares éticos na prática jurídica.",
    difficulty: "basico",
    tags: &["sigilo", "conduta profissional"],
  },
  QuestionTemplate {
    area: Area::Etica,
    prompt: "Conflito de interesses ocorre quando:",
    options: [
      "há mais de um cliente",
      "há interesse pessoal que compromete imparcialidade",
      "o processo é complexo",
      "o juiz é competente",
    ],
    answer: 1,
    explanation: "Conflito de interesses surge quando interesses pessoais ou de terceiros podem comprometer a atuação profissional.",
    difficulty: "basico",
    tags: &["conflito de interesses"],
  },
];

/// Cosmetic prompt variants; the empty variant keeps the template text as is.
const PREFIXES: [&str; 4] = ["(Nível Básico) ", "(Revisão) ", "(Fixação) ", ""];
const SUFFIXES: [&str; 3] = ["", " (marque a correta)", " (assinale a alternativa correta)"];

/// Shuffle a template's options and return (options, answer) with the
/// answer index pointing at the original correct option's text. If a
/// template ever carried duplicate option text the first match wins,
/// deterministically.
fn shuffle_options<R: rand::Rng>(rng: &mut R, template: &QuestionTemplate) -> (Vec<String>, usize) {
  let correct_text = template.options[template.answer];
  let mut options: Vec<String> = template.options.iter().map(|s| s.to_string()).collect();
  options.shuffle(rng);
  let answer = options
    .iter()
    .position(|o| o == correct_text)
    .unwrap_or(0);
  (options, answer)
}

/// Generate filler questions with sequential ids from `start_id` until the
/// bank would hold `target_total` records (the `start_id - 1` existing ones
/// count toward the target). The id ceiling is a safety net against a
/// target that can never be reached; hitting it is logged, not an error.
pub fn generate_extra_questions(start_id: u32, target_total: usize) -> Vec<QuestionRecord> {
  let mut rng = rand::rng();
  let mut out = Vec::new();
  let mut id = start_id;

  // The start_id - 1 records already in the bank count toward the target
  let existing = (start_id as usize).saturating_sub(1);
  while out.len() + existing < target_total {
    if id > start_id.saturating_add(config::GENERATOR_ID_CEILING) {
      tracing::warn!(
        "question generator hit its id ceiling at {} before reaching target {}",
        id,
        target_total
      );
      break;
    }

    // TEMPLATES is a non-empty const, so choose cannot fail
    let Some(template) = TEMPLATES.choose(&mut rng) else {
      break;
    };
    let prefix = PREFIXES.choose(&mut rng).copied().unwrap_or("");
    let suffix = SUFFIXES.choose(&mut rng).copied().unwrap_or("");
    let prompt = format!("{}{}{}", prefix, template.prompt, suffix);

    let (options, answer) = shuffle_options(&mut rng, template);

    out.push(QuestionRecord {
      id,
      area: template.area,
      prompt,
      options,
      answer,
      explanation: template.explanation.to_string(),
      difficulty: Some(template.difficulty.to_string()),
      tags: template.tags.iter().map(|s| s.to_string()).collect(),
    });
    id += 1;
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_generates_up_to_target() {
    let out = generate_extra_questions(36, 120);
    assert_eq!(out.len(), 120 - 35);
  }

  #[test]
  fn test_ids_are_sequential_from_start() {
    let out = generate_extra_questions(50, 60);
    let ids: Vec<u32> = out.iter().map(|q| q.id).collect();
    assert_eq!(ids, (50..=60).collect::<Vec<u32>>());
  }

  #[test]
  fn test_target_already_met_generates_nothing() {
    assert!(generate_extra_questions(121, 120).is_empty());
    assert!(generate_extra_questions(121, 0).is_empty());
  }

  #[test]
  fn test_shuffle_preserves_correct_answer_text() {
    // The one load-bearing generator property: whatever order the options
    // land in, the recorded answer index must still name the template's
    // correct option.
    let mut rng = rand::rng();
    for _ in 0..1000 {
      for template in TEMPLATES {
        let (options, answer) = shuffle_options(&mut rng, template);
        assert_eq!(options[answer], template.options[template.answer]);
      }
    }
  }

  #[test]
  fn test_generated_records_pass_bank_validation() {
    let mut questions = crate::bank::seed::seed_questions();
    let start_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
    questions.extend(generate_extra_questions(start_id, 120));
    assert!(crate::bank::QuestionBank::new(questions).is_ok());
  }

  #[test]
  fn test_generated_records_carry_template_metadata() {
    let out = generate_extra_questions(1, 30);
    for q in &out {
      assert_eq!(q.difficulty.as_deref(), Some("basico"));
      assert!(!q.explanation.is_empty());
      assert!(q.prompt.len() >= TEMPLATES.iter().map(|t| t.prompt.len()).min().unwrap());
    }
  }

  #[test]
  fn test_prompt_decoration_wraps_a_template() {
    let out = generate_extra_questions(1, 5);
    for q in &out {
      assert!(
        TEMPLATES.iter().any(|t| q.prompt.contains(t.prompt)),
        "prompt {:?} does not contain any template text",
        q.prompt
      );
    }
  }
}
