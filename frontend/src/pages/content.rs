//! Copy for the landing page. Everything here is fixed pt-BR text.

use crate::components::faq::FaqEntry;

pub struct Outcome {
    pub icon: &'static str,
    pub text: &'static str,
}

pub struct Bonus {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub struct Loss {
    pub period: &'static str,
    pub amount: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

pub const QUICK_QUESTIONS: &[&str] = &[
    "Você já aceitou um projeto por um valor ridículo só pra 'não perder o cliente'?",
    "Fica com aquele frio na barriga na hora de passar o orçamento, com medo de perder o job?",
    "Vê colegas cobrando 2x, 3x mais que você... mas não sabe COMO eles chegaram naquele valor?",
    "Trabalha MUITO, mas no final do mês a conta não fecha?",
    "Tem vergonha de cobrar o que realmente vale o seu trabalho?",
];

pub const PAINS: &[&str] = &[
    "Trabalha mais horas do que deveria",
    "Aceita alterações infinitas sem cobrar mais",
    "Fica refém de clientes que pagam migalhas",
    "Nunca consegue sair do 'aperto' financeiro",
    "Sente que trabalha MUITO mas ganha POUCO",
];

pub const OUTCOMES: &[Outcome] = &[
    Outcome { icon: "⏱️", text: "Quanto cobrar por hora" },
    Outcome { icon: "📦", text: "Quanto cobrar por projeto" },
    Outcome { icon: "📉", text: "Cálculo de preço mínimo sem prejuízo" },
    Outcome { icon: "➡️", text: "Quando e como aumentar seus valores" },
    Outcome { icon: "⭐", text: "Como responder pedidos de desconto" },
    Outcome { icon: "🙋", text: "Valor ideal mesmo sendo iniciante" },
];

pub const GUIDE_FEATURES: &[&str] = &[
    "Custo-hora REAL",
    "Tabela de preços 2025",
    "4 métodos de precificação",
    "Scripts de negociação",
    "Como apresentar preço",
    "Lidando com objeções",
];

pub const BONUSES: &[Bonus] = &[
    Bonus {
        number: 1,
        title: "Planilha Automática",
        description: "Insira seus dados e descubra instantaneamente quanto cobrar.",
        value: "R$27",
        icon: "🧮",
    },
    Bonus {
        number: 2,
        title: "Calculadora de Impostos",
        description: "Saiba quanto vai sobrar REALMENTE no seu bolso.",
        value: "R$17",
        icon: "💲",
    },
    Bonus {
        number: 3,
        title: "10 Modelos de Proposta",
        description: "Copy pronta pra você só personalizar e enviar.",
        value: "R$37",
        icon: "📄",
    },
    Bonus {
        number: 4,
        title: "Checklist de Custos Ocultos",
        description: "47 custos que você provavelmente está esquecendo.",
        value: "R$17",
        icon: "⚡",
    },
    Bonus {
        number: 5,
        title: "Script de Negociação",
        description: "O que falar quando o cliente pede desconto.",
        value: "R$27",
        icon: "➡️",
    },
    Bonus {
        number: 6,
        title: "Acesso Vitalício",
        description: "Pague uma vez e receba todas as atualizações futuras.",
        value: "R$47",
        icon: "🔒",
    },
];

pub const LOSSES: &[Loss] = &[
    Loss { period: "Por Semana", amount: "- R$ 2.000" },
    Loss { period: "Por Mês", amount: "- R$ 8.000" },
    Loss { period: "Por Ano", amount: "- R$ 96.000" },
];

pub const INCLUDED: &[&str] = &[
    "E-book completo (40 páginas)",
    "Planilha calculadora automática",
    "Calculadora de impostos",
    "10 modelos de proposta",
    "Acesso vitalício e imediato",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Marina",
        role: "Designer Gráfica",
        text: "Eu cobrava R$30 por logo. Depois do guia, passei a cobrar R$350. Em 1 mês já recuperei o investimento 200x.",
    },
    Testimonial {
        name: "Rafael",
        role: "Desenvolvedor Web",
        text: "Finalmente entendi quanto REALMENTE custa minha hora. Estava perdendo R$3.000 por mês sem saber!",
    },
    Testimonial {
        name: "Juliana",
        role: "Redatora Freelancer",
        text: "A planilha automática mudou minha vida. Em 2 minutos eu calculo qualquer orçamento com confiança.",
    },
    Testimonial {
        name: "Carlos",
        role: "Social Media",
        text: "Usei o script de negociação e consegui fechar um cliente que queria desconto. Fechei pelo preço cheio!",
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Funciona para qualquer área?",
        answer: "Sim! O guia traz tabelas específicas para Design, Dev, Redação, Marketing, VA, Consultoria e muito mais.",
    },
    FaqEntry {
        question: "Sou iniciante, funciona pra mim?",
        answer: "COM CERTEZA! Tem um módulo inteiro dedicado a precificação para iniciantes.",
    },
    FaqEntry {
        question: "E se eu não gostar?",
        answer: "Devolvo 100% em até 7 dias. Sem perguntas.",
    },
    FaqEntry {
        question: "Quando vou receber?",
        answer: "Assim que o pagamento for aprovado, você recebe IMEDIATAMENTE no seu email.",
    },
    FaqEntry {
        question: "As planilhas funcionam no celular?",
        answer: "Sim! São compatíveis com Excel, Google Sheets e funcionam no celular.",
    },
    FaqEntry {
        question: "Tem suporte?",
        answer: "Sim, via email com resposta em até 24h.",
    },
    FaqEntry {
        question: "Preciso pagar mensalidade?",
        answer: "NÃO! Você paga UMA VEZ e tem acesso VITALÍCIO + atualizações gratuitas.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_has_seven_filled_entries() {
        assert_eq!(FAQ_ENTRIES.len(), 7);
        assert!(FAQ_ENTRIES
            .iter()
            .all(|entry| !entry.question.is_empty() && !entry.answer.is_empty()));
    }

    #[test]
    fn bonuses_are_numbered_in_order() {
        let numbers: Vec<u8> = BONUSES.iter().map(|bonus| bonus.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }
}
