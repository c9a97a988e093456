//! Literal seed question data.
//!
//! The bank ships in-process; a file-backed loader would be an external
//! collaborator and is deliberately not part of this crate.

use crate::domain::{Area, QuestionRecord};

fn question(
  id: u32,
  area: Area,
  prompt: &str,
  options: [&str; 4],
  answer: usize,
  explanation: &str,
) -> QuestionRecord {
  QuestionRecord {
    id,
    area,
    prompt: prompt.to_string(),
    options: options.iter().map(|s| s.to_string()).collect(),
    answer,
    explanation: explanation.to_string(),
    difficulty: None,
    tags: Vec::new(),
  }
}

/// The fixed starting bank, ids assigned sequentially from 1 in listing
/// order.
pub fn seed_questions() -> Vec<QuestionRecord> {
  let civil: &[(&str, [&str; 4], usize, &str)] = &[
    (
      "A personalidade civil da pessoa começa, em regra:",
      ["na concepção", "no nascimento com vida", "aos 18 anos", "no registro civil"],
      1,
      "Em regra, a personalidade civil começa com o nascimento com vida.",
    ),
    (
      "Capacidade de direito é:",
      [
        "aptidão para ser titular de direitos e deveres",
        "aptidão para praticar atos sozinho",
        "poder de representar alguém",
        "condição exclusiva de maiores de idade",
      ],
      0,
      "Capacidade de direito é a aptidão genérica para ter direitos e deveres.",
    ),
    (
      "Em regra, a maioridade civil ocorre aos:",
      ["16 anos", "18 anos", "21 anos", "14 anos"],
      1,
      "A regra geral é 18 anos para a maioridade civil.",
    ),
    (
      "Domicílio da pessoa natural, em regra, é:",
      [
        "onde nasceu",
        "onde trabalha",
        "onde estabelece residência com ânimo definitivo",
        "onde tem família",
      ],
      2,
      "Domicílio, em regra, é a residência com intenção de permanência.",
    ),
    (
      "Pessoa jurídica é:",
      [
        "qualquer pessoa maior de idade",
        "ente criado pela lei, com personalidade própria",
        "apenas órgão público",
        "apenas empresa com lucro",
      ],
      1,
      "Pessoa jurídica tem personalidade própria, distinta das pessoas que a compõem.",
    ),
    (
      "Bens móveis são, em regra:",
      [
        "os que não podem ser transportados",
        "os que podem ser transportados sem alteração substancial",
        "somente imóveis",
        "somente dinheiro",
      ],
      1,
      "Bens móveis podem ser transportados sem alteração da substância.",
    ),
    (
      "Negócio jurídico é, em geral:",
      [
        "qualquer conversa",
        "manifestação de vontade que produz efeitos jurídicos",
        "qualquer ato ilícito",
        "somente contrato escrito",
      ],
      1,
      "Negócio jurídico é manifestação de vontade com efeitos no mundo jurídico.",
    ),
    (
      "Um contrato, em regra, exige:",
      [
        "acordo de vontades",
        "apenas assinatura em cartório",
        "sempre duas testemunhas",
        "sempre forma pública",
      ],
      0,
      "O essencial é o acordo de vontades, respeitada a forma exigida em casos específicos.",
    ),
    (
      "A boa-fé objetiva se relaciona a:",
      [
        "um sentimento interno",
        "padrão de conduta leal e cooperativo",
        "direito penal",
        "apenas promessa verbal",
      ],
      1,
      "Boa-fé objetiva é padrão de conduta esperado nas relações jurídicas.",
    ),
    (
      "Responsabilidade civil, em regra, visa:",
      ["punir com prisão", "reparar dano causado", "anular qualquer contrato", "criar imposto"],
      1,
      "A responsabilidade civil tem foco na reparação do dano.",
    ),
  ];

  let penal: &[(&str, [&str; 4], usize, &str)] = &[
    (
      "O princípio da legalidade, em matéria penal, estabelece que:",
      [
        "não há crime sem lei anterior que o defina",
        "todo crime deve ser punido com prisão",
        "a lei penal retroage sempre",
        "o juiz pode criar crimes",
      ],
      0,
      "Art. 1º do CP: não há crime sem lei anterior que o defina, nem pena sem prévia cominação legal.",
    ),
    (
      "A lei penal mais benéfica ao réu:",
      ["nunca retroage", "retroage para beneficiá-lo", "só vale para crimes futuros", "depende de decreto"],
      1,
      "A lei posterior mais benigna retroage em favor do réu.",
    ),
    (
      "A legítima defesa exige, em regra:",
      [
        "agressão injusta, atual ou iminente",
        "qualquer provocação verbal",
        "autorização judicial",
        "dano patrimonial",
      ],
      0,
      "Legítima defesa: repelir agressão injusta, atual ou iminente, com uso moderado dos meios necessários.",
    ),
    (
      "A imputabilidade penal, em regra, inicia-se aos:",
      ["16 anos", "18 anos", "21 anos", "14 anos"],
      1,
      "Menores de 18 anos são penalmente inimputáveis, sujeitos a legislação especial.",
    ),
    (
      "O crime consumado ocorre quando:",
      [
        "o agente é preso",
        "nele se reúnem todos os elementos de sua definição legal",
        "há mera cogitação",
        "a vítima perdoa",
      ],
      1,
      "Consumação: o tipo penal se realiza integralmente.",
    ),
  ];

  let constitucional: &[(&str, [&str; 4], usize, &str)] = &[
    (
      "São Poderes da União, independentes e harmônicos entre si:",
      [
        "Executivo, Legislativo e Judiciário",
        "apenas Executivo e Judiciário",
        "Ministério Público e Executivo",
        "Estados e Municípios",
      ],
      0,
      "Art. 2º da CF: Legislativo, Executivo e Judiciário.",
    ),
    (
      "O habeas corpus é cabível para proteger:",
      ["direito de propriedade", "liberdade de locomoção", "direito autoral", "acesso a informações"],
      1,
      "O habeas corpus tutela a liberdade de ir e vir contra ilegalidade ou abuso de poder.",
    ),
    (
      "A Constituição pode ser emendada mediante proposta aprovada em:",
      [
        "turno único, por maioria simples",
        "dois turnos, por três quintos dos votos",
        "referendo popular apenas",
        "decreto presidencial",
      ],
      1,
      "Art. 60, §2º: dois turnos em cada Casa, três quintos dos votos.",
    ),
    (
      "O mandado de segurança protege:",
      [
        "liberdade de locomoção",
        "direito líquido e certo não amparado por habeas corpus ou habeas data",
        "qualquer interesse difuso",
        "apenas servidores públicos",
      ],
      1,
      "Cabe MS contra ilegalidade ou abuso de poder quando há direito líquido e certo.",
    ),
    (
      "São direitos sociais previstos na Constituição, entre outros:",
      ["educação, saúde e trabalho", "apenas propriedade", "somente lazer", "apenas voto"],
      0,
      "Art. 6º da CF lista educação, saúde, trabalho, moradia, entre outros.",
    ),
  ];

  let processo_civil: &[(&str, [&str; 4], usize, &str)] = &[
    (
      "A petição inicial será indeferida quando:",
      [
        "for inepta",
        "tiver mais de dez páginas",
        "faltar firma reconhecida",
        "o réu discordar do pedido",
      ],
      0,
      "Art. 330 do CPC traz as hipóteses de indeferimento, entre elas a inépcia.",
    ),
    (
      "O prazo para contestação, em regra, é de:",
      ["5 dias", "10 dias", "15 dias úteis", "30 dias corridos"],
      2,
      "Art. 335 do CPC: 15 dias úteis.",
    ),
    (
      "A coisa julgada material torna a decisão:",
      ["provisória", "imutável e indiscutível", "inexistente", "recorrível a qualquer tempo"],
      1,
      "Art. 502 do CPC: autoridade que torna imutável e indiscutível a decisão de mérito.",
    ),
    (
      "São elementos essenciais da sentença:",
      ["relatório, fundamentação e dispositivo", "apenas dispositivo", "ementa e votos", "somente a assinatura"],
      0,
      "Art. 489 do CPC.",
    ),
    (
      "A tutela de urgência exige:",
      [
        "probabilidade do direito e perigo de dano ou risco ao resultado útil do processo",
        "apenas pedido verbal",
        "trânsito em julgado",
        "garantia real em qualquer caso",
      ],
      0,
      "Art. 300 do CPC.",
    ),
  ];

  let processo_penal: &[(&str, [&str; 4], usize, &str)] = &[
    (
      "O inquérito policial é, em regra:",
      [
        "indispensável à ação penal",
        "procedimento administrativo e inquisitivo",
        "fase judicial do processo",
        "privativo do juiz",
      ],
      1,
      "O inquérito é procedimento administrativo, inquisitivo e preparatório da ação penal.",
    ),
    (
      "A prisão em flagrante pode ser realizada por:",
      [
        "apenas o delegado",
        "qualquer do povo, e deve ser realizada pelas autoridades policiais",
        "somente o juiz",
        "apenas o Ministério Público",
      ],
      1,
      "Art. 301 do CPP: qualquer do povo pode e as autoridades policiais devem prender quem esteja em flagrante.",
    ),
    (
      "A ação penal pública incondicionada é promovida por:",
      ["ofendido", "Ministério Público", "delegado de polícia", "juiz, de ofício"],
      1,
      "Art. 129, I, da CF: o MP é o titular da ação penal pública.",
    ),
    (
      "Em regra, o ônus de provar a autoria do crime cabe:",
      ["à defesa", "à acusação", "ao juiz", "ao perito"],
      1,
      "Decorrência da presunção de inocência.",
    ),
    (
      "A audiência de custódia deve ocorrer, em regra, em até:",
      ["24 horas após a prisão", "15 dias", "60 dias", "6 meses"],
      0,
      "O preso deve ser apresentado ao juiz em até 24 horas.",
    ),
  ];

  let etica: &[(&str, [&str; 4], usize, &str)] = &[
    (
      "São direitos do advogado, entre outros:",
      [
        "exercer a profissão com liberdade e independência",
        "desacatar magistrados",
        "quebrar sigilo por conveniência",
        "recusar prestação de contas ao cliente",
      ],
      0,
      "Art. 7º do EAOAB assegura liberdade e independência no exercício profissional.",
    ),
    (
      "O sigilo profissional do advogado:",
      [
        "é absoluto em qualquer hipótese",
        "deve ser guardado, salvo hipóteses excepcionais como grave ameaça à vida",
        "não existe",
        "vale somente em audiência",
      ],
      1,
      "O Código de Ética admite ceder o sigilo apenas em hipóteses excepcionais.",
    ),
    (
      "A publicidade profissional do advogado deve ser:",
      ["mercantilista e captatória", "informativa, discreta e sóbria", "proibida em qualquer meio", "ilimitada"],
      1,
      "A publicidade é admitida com caráter meramente informativo, com discrição e sobriedade.",
    ),
    (
      "Constitui infração disciplinar:",
      [
        "recusar causa contrária à própria consciência",
        "reter abusivamente autos recebidos com vista",
        "cobrar honorários contratados",
        "substabelecer com reserva de poderes",
      ],
      1,
      "Art. 34 do EAOAB tipifica a retenção abusiva de autos.",
    ),
    (
      "Os honorários advocatícios devem ser fixados:",
      [
        "sempre no máximo da tabela",
        "com moderação, atendidos os parâmetros legais e éticos",
        "livremente, sem contrato",
        "apenas em salários mínimos",
      ],
      1,
      "A fixação observa moderação e os critérios do Código de Ética.",
    ),
  ];

  let groups: [(Area, &[(&str, [&str; 4], usize, &str)]); 6] = [
    (Area::Civil, civil),
    (Area::Penal, penal),
    (Area::Constitucional, constitucional),
    (Area::ProcessoCivil, processo_civil),
    (Area::ProcessoPenal, processo_penal),
    (Area::Etica, etica),
  ];

  let mut questions = Vec::new();
  let mut id = 1;
  for (area, group) in groups {
    for &(prompt, options, answer, explanation) in group {
      questions.push(question(id, area, prompt, options, answer, explanation));
      id += 1;
    }
  }
  questions
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bank::QuestionBank;
  use crate::domain::AREAS;

  #[test]
  fn test_seed_builds_valid_bank() {
    let bank = QuestionBank::new(seed_questions());
    assert!(bank.is_ok());
  }

  #[test]
  fn test_seed_ids_are_sequential_from_one() {
    let questions = seed_questions();
    for (i, q) in questions.iter().enumerate() {
      assert_eq!(q.id, i as u32 + 1);
    }
  }

  #[test]
  fn test_every_area_has_questions() {
    let bank = QuestionBank::new(seed_questions()).unwrap();
    for area in AREAS {
      assert!(
        !bank.find_by_area(area.as_str()).is_empty(),
        "no seed questions for {}",
        area.as_str()
      );
    }
  }
}
