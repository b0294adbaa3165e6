use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::CountdownBanner;
use crate::components::cta::{CtaButton, SectionTitle};
use crate::components::faq::Faq;
use crate::config;
use crate::pages::content::{
    BONUSES, FAQ_ENTRIES, GUIDE_FEATURES, INCLUDED, LOSSES, OUTCOMES, PAINS, QUICK_QUESTIONS,
    TESTIMONIALS,
};
use crate::utils::scroll::scroll_to_anchor;

fn check_row(text: &'static str) -> Html {
    html! {
        <div class="check-row">
            <span class="check-icon">{"✔"}</span>
            <span>{text}</span>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let initial_seconds = *use_state(config::initial_countdown_seconds);

    let scroll_to_offer = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(config::OFFER_ANCHOR);
    });

    html! {
        <div class="landing-page">
            <CountdownBanner initial_seconds={initial_seconds} />

            <header class="hero gradient-bg">
                <div class="hero-content">
                    <h1>
                        {"VOCÊ ESTÁ COBRANDO "}
                        <span class="accent">{"BARATO DEMAIS"}</span>
                        {" E NEM PERCEBE"}
                    </h1>
                    <div class="hero-image">
                        <img
                            src="https://images.unsplash.com/photo-1553484771-047a44eee27b?auto=format&fit=crop&q=80&w=1600"
                            alt="Freelancer Profissional"
                        />
                    </div>
                    <p class="hero-subtitle">
                        {"Descubra em 5 minutos quanto você "}
                        <span class="underline">{"REALMENTE"}</span>
                        {" deveria estar cobrando."}
                    </p>
                    <CtaButton onclick={scroll_to_offer.clone()}>
                        {"REVELAR MEU PREÇO REAL AGORA"}
                    </CtaButton>
                    <div class="social-proof">
                        <div class="avatars">
                            { for (1..=4).map(|i| html! {
                                <img
                                    key={i}
                                    src={format!("https://picsum.photos/seed/{}/40/40", i + 20)}
                                    alt="Avatar"
                                />
                            }) }
                        </div>
                        <span>{"+3.427 Freelancers precificando com segurança"}</span>
                    </div>
                </div>
            </header>

            <section class="quick-questions">
                <div class="questions-card">
                    <h3>{"➜ Responda rápido:"}</h3>
                    <div class="question-list">
                        { for QUICK_QUESTIONS.iter().map(|question| html! {
                            <div class="question-row">
                                <span class="cross-icon">{"✖"}</span>
                                <p>{*question}</p>
                            </div>
                        }) }
                    </div>
                    <div class="questions-verdict">
                        <p>
                            {"Se você respondeu "}
                            <strong>{"SIM"}</strong>
                            {" para pelo menos uma dessas perguntas... essa página foi feita especialmente para você."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="pain-section">
                <div class="pain-content">
                    <div class="pain-text">
                        <h2>
                            {"A DOR INVISÍVEL QUE ESTÁ "}
                            <span class="danger">{"MATANDO"}</span>
                            {" O SEU NEGÓCIO"}
                        </h2>
                        <p>
                            {"Sabe qual é o maior erro dos freelancers brasileiros? Não é falta de talento. Não é falta de cliente. É cobrar "}
                            <strong>{"MENOS DO QUE DEVERIA"}</strong>
                            {"."}
                        </p>
                        <div class="pain-list">
                            { for PAINS.iter().copied().map(check_row) }
                        </div>
                    </div>
                    <div class="pain-result">
                        <div class="result-tag">{"O RESULTADO?"}</div>
                        <h4>{"Você virou escravo do próprio negócio."}</h4>
                        <p class="quote">
                            {"\"Enquanto isso, outros freelancers com O MESMO nível de habilidade que você estão faturando 3x, 5x, até 10x mais... fazendo exatamente o mesmo trabalho.\""}
                        </p>
                        <div class="result-box">
                            <p>{"A diferença? Eles sabem EXATAMENTE quanto cobrar. E você... ainda está chutando."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="formula-section">
                <div class="container">
                    <SectionTitle centered={true}>{"E SE EU TE DISSESSE QUE EXISTE UMA FÓRMULA EXATA?"}</SectionTitle>
                    <p class="lead">{"Imagine acordar amanhã e saber com TOTAL SEGURANÇA:"}</p>
                    <div class="outcome-grid">
                        { for OUTCOMES.iter().map(|outcome| html! {
                            <div class="outcome-card">
                                <div class="outcome-icon">{outcome.icon}</div>
                                <span>{outcome.text}</span>
                            </div>
                        }) }
                    </div>
                    <div class="product-card">
                        <div class="product-mockup">
                            <div class="mockup-page">{"📄"}</div>
                        </div>
                        <div class="product-details">
                            <span class="launch-tag">{"Lançamento 2025"}</span>
                            <h3>{"GUIA DEFINITIVO DE PRECIFICAÇÃO PARA FREELANCERS"}</h3>
                            <p class="quote">{"O único material que ensina você a calcular seu preço REAL em menos de 5 minutos."}</p>
                            <div class="feature-grid">
                                { for GUIDE_FEATURES.iter().copied().map(check_row) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="bonus-section">
                <div class="container">
                    <div class="bonus-header">
                        <h2>{"BÔNUS EXCLUSIVOS"}</h2>
                        <p>{"Você vai levar mais de R$125 em materiais extras totalmente grátis."}</p>
                    </div>
                    <div class="bonus-grid">
                        { for BONUSES.iter().map(|bonus| html! {
                            <div key={bonus.number} class="bonus-card">
                                <div class="bonus-tag">{format!("Bônus #{}", bonus.number)}</div>
                                <div class="bonus-icon">{bonus.icon}</div>
                                <h4>{bonus.title}</h4>
                                <p>{bonus.description}</p>
                                <div class="bonus-value">
                                    <span class="old-value">{format!("Valor: {}", bonus.value)}</span>
                                    <span class="free">{"GRÁTIS"}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="math-section">
                <div class="container narrow">
                    <SectionTitle centered={true} dark={true}>{"QUANTO VALE SABER PRECIFICAR CORRETAMENTE?"}</SectionTitle>
                    <div class="math-card">
                        <p class="math-intro">
                            {"Se você cobra "}<strong>{"R$50/h"}</strong>
                            {" e deveria cobrar "}<strong>{"R$150/h"}</strong>{"..."}
                        </p>
                        <div class="loss-grid">
                            { for LOSSES.iter().map(|loss| html! {
                                <div class="loss-card">
                                    <p class="loss-period">{loss.period}</p>
                                    <p class="loss-amount">{loss.amount}</p>
                                </div>
                            }) }
                        </div>
                        <p class="math-conclusion">
                            {"Você está deixando de ganhar QUASE 100 MIL REAIS simplesmente por não saber quanto cobrar."}
                        </p>
                    </div>
                    <CtaButton onclick={scroll_to_offer.clone()} class={classes!("inverted")}>
                        {"PARAR DE PERDER DINHEIRO AGORA"}
                    </CtaButton>
                </div>
            </section>

            <section id={config::OFFER_ANCHOR} class="offer-section">
                <div class="offer-card">
                    <div class="offer-badge">{"OFERTA ESPECIAL"}</div>
                    <h3>{"Acesso Imediato ao Guia + Todos os Bônus"}</h3>
                    <div class="price-row">
                        <span class="old-price">{"De R$ 97,00"}</span>
                        <span class="price-joiner">{"por apenas"}</span>
                        <div class="price">
                            <span class="currency">{"R$"}</span>
                            <span class="amount">{"37,00"}</span>
                        </div>
                    </div>
                    <p class="installments">{"\"Ou em 12x de R$ 3,67 no cartão\""}</p>
                    <div class="included-list">
                        { for INCLUDED.iter().copied().map(check_row) }
                    </div>
                    <CtaButton class={classes!("wide")}>{"✅ QUERO MINHA CÓPIA AGORA"}</CtaButton>
                    <div class="trust-badges">
                        <span>{"🔒 Compra 100% Segura"}</span>
                        <span>{"🛡️ Garantia de 7 Dias"}</span>
                        <span>{"⏱️ Acesso Imediato"}</span>
                    </div>
                    <div class="guarantee">
                        <img src="https://picsum.photos/seed/medal/200/200" alt="Selo Garantia" />
                        <div>
                            <h4>{"Garantia Blindada de 7 Dias"}</h4>
                            <p>{"Se em 7 dias você não conseguir calcular seu preço com segurança ou não achar que vale 10x o investimento, eu devolvo 100% do seu dinheiro. Sem perguntas."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="testimonials-section">
                <div class="container">
                    <SectionTitle centered={true}>{"O QUE OUTROS FREELANCERS ESTÃO DIZENDO:"}</SectionTitle>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <div key={testimonial.name} class="testimonial-card">
                                <div class="stars">{"★★★★★"}</div>
                                <p class="quote">{format!("\"{}\"", testimonial.text)}</p>
                                <div class="author">
                                    <div class="author-avatar"></div>
                                    <div>
                                        <p class="author-name">{testimonial.name}</p>
                                        <p class="author-role">{testimonial.role}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="faq-section">
                <div class="container narrow">
                    <SectionTitle centered={true}>{"PERGUNTAS FREQUENTES:"}</SectionTitle>
                    <Faq entries={FAQ_ENTRIES} />
                </div>
            </section>

            <section class="final-cta gradient-bg">
                <div class="container narrow">
                    <h2>{"É AGORA OU NUNCA."}</h2>
                    <p>{"Invista R$37 hoje e descubra quanto você DEVERIA estar ganhando. O risco é ZERO e a mudança é imediata."}</p>
                    <CtaButton onclick={scroll_to_offer} class={classes!("large")}>
                        {"QUERO MINHA CÓPIA AGORA POR R$37"}
                    </CtaButton>
                    <div class="payment-logos">
                        <img src="https://upload.wikimedia.org/wikipedia/commons/b/b5/Hotmart_logo.png" alt="Hotmart" />
                        <img src="https://upload.wikimedia.org/wikipedia/commons/thumb/5/5e/Visa_Inc._logo.svg/2560px-Visa_Inc._logo.svg.png" alt="Visa" />
                        <img src="https://upload.wikimedia.org/wikipedia/commons/thumb/2/2a/Mastercard-logo.svg/1280px-Mastercard-logo.svg.png" alt="Mastercard" />
                    </div>
                    <p class="postscript">{"P.S.: Freelancers que aplicaram este sistema aumentaram sua renda média em 140% nos primeiros 30 dias."}</p>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"© 2025 - Guia de Precificação para Freelancers | Todos os direitos reservados"}</p>
                <p>{"CNPJ: XX.XXX.XXX/0001-XX | Suporte: contato@seuemail.com"}</p>
                <div class="footer-links">
                    <a href="#">{"Termos de Uso"}</a>
                    <a href="#">{"Privacidade"}</a>
                </div>
            </footer>

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #0f172a;
                }

                .landing-page {
                    min-height: 100vh;
                }

                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .container.narrow {
                    max-width: 56rem;
                }

                .gradient-bg {
                    background: linear-gradient(135deg, #0f172a 0%, #1e293b 60%, #7c2d12 100%);
                    color: #fff;
                }

                .accent {
                    color: #f97316;
                }

                .danger {
                    color: #ef4444;
                }

                .section-title {
                    font-size: 2.25rem;
                    font-weight: 800;
                    margin-bottom: 2rem;
                    color: #0f172a;
                }

                .section-title.centered {
                    text-align: center;
                }

                .section-title.dark {
                    color: #fff;
                }

                .cta-button {
                    background: #ea580c;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 12px;
                    cursor: pointer;
                    box-shadow: 0 0 20px rgba(234, 88, 12, 0.5);
                    transition: transform 0.2s ease, background 0.2s ease;
                }

                .cta-button:hover {
                    background: #f97316;
                    transform: scale(1.05);
                }

                .cta-button:active {
                    transform: scale(0.95);
                }

                .cta-button.inverted {
                    background: #fff;
                    color: #ea580c;
                }

                .cta-button.wide {
                    padding: 1rem 4rem;
                    margin-bottom: 2rem;
                }

                .cta-button.large {
                    padding: 1.5rem 5rem;
                    font-size: 1.5rem;
                }

                .check-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-align: left;
                }

                .check-icon {
                    color: #22c55e;
                }

                .quote {
                    font-style: italic;
                }

                .hero {
                    padding: 8rem 1.5rem 5rem;
                    overflow: hidden;
                }

                .hero-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 4rem;
                    font-weight: 900;
                    line-height: 1.1;
                    margin-bottom: 2.5rem;
                    max-width: 64rem;
                }

                .hero-image {
                    width: 100%;
                    max-width: 56rem;
                    margin-bottom: 3rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 4px solid rgba(30, 41, 59, 0.5);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                }

                .hero-image img {
                    width: 100%;
                    height: auto;
                    display: block;
                }

                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #cbd5e1;
                    max-width: 48rem;
                    margin-bottom: 2.5rem;
                }

                .hero-subtitle .underline {
                    color: #fff;
                    font-weight: 700;
                    text-decoration: underline;
                }

                .social-proof {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #94a3b8;
                    font-size: 0.875rem;
                }

                .avatars img {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid #0f172a;
                    margin-left: -0.5rem;
                }

                .quick-questions {
                    padding: 4rem 1.5rem;
                    background: #fff;
                }

                .questions-card {
                    max-width: 56rem;
                    margin: -5rem auto 0;
                    background: #f8fafc;
                    border: 1px solid #e2e8f0;
                    border-radius: 1.5rem;
                    padding: 3rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .question-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }

                .question-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .cross-icon {
                    color: #ef4444;
                }

                .questions-verdict {
                    text-align: center;
                    padding: 1.5rem;
                    background: #fff7ed;
                    border: 1px solid #fed7aa;
                    border-radius: 1rem;
                    color: #7c2d12;
                    font-weight: 600;
                }

                .pain-section {
                    padding: 5rem 1.5rem;
                    background: #0f172a;
                    color: #fff;
                }

                .pain-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                }

                .pain-text,
                .pain-result {
                    flex: 1;
                }

                .pain-text h2 {
                    font-size: 3rem;
                    font-weight: 900;
                    line-height: 1.1;
                }

                .pain-text p,
                .pain-list {
                    color: #cbd5e1;
                }

                .pain-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .pain-result {
                    position: relative;
                    background: #1e293b;
                    border: 1px solid #334155;
                    border-radius: 1.5rem;
                    padding: 2rem;
                }

                .result-tag {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    background: #ea580c;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-weight: 700;
                    font-size: 0.875rem;
                }

                .pain-result .quote {
                    color: #94a3b8;
                }

                .result-box {
                    padding: 1rem;
                    background: rgba(15, 23, 42, 0.5);
                    border: 1px solid #334155;
                    border-radius: 12px;
                    color: #f97316;
                    font-weight: 700;
                }

                .formula-section {
                    padding: 6rem 1.5rem;
                    background: #fff;
                }

                .lead {
                    font-size: 1.25rem;
                    color: #475569;
                    margin-bottom: 3rem;
                }

                .outcome-grid,
                .bonus-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }

                .outcome-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.5rem;
                    background: #f8fafc;
                    border: 1px solid #f1f5f9;
                    border-radius: 1rem;
                    font-weight: 700;
                }

                .outcome-icon,
                .bonus-icon {
                    width: 3rem;
                    height: 3rem;
                    background: #ffedd5;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }

                .product-card {
                    display: flex;
                    gap: 2.5rem;
                    align-items: center;
                    background: #0f172a;
                    color: #fff;
                    border-radius: 1.5rem;
                    padding: 3rem;
                    text-align: left;
                }

                .product-mockup {
                    flex: 1;
                    display: flex;
                    justify-content: center;
                }

                .mockup-page {
                    width: 100%;
                    max-width: 280px;
                    height: 12rem;
                    background: #fff;
                    border-radius: 12px;
                    transform: rotate(3deg);
                    transition: transform 0.3s ease;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 4rem;
                }

                .mockup-page:hover {
                    transform: rotate(0deg);
                }

                .product-details {
                    flex: 2;
                }

                .launch-tag {
                    display: inline-block;
                    background: #ea580c;
                    font-size: 0.75rem;
                    font-weight: 900;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .product-details .quote {
                    color: #cbd5e1;
                    font-size: 1.25rem;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .bonus-section {
                    padding: 6rem 1.5rem;
                    background: #f8fafc;
                }

                .bonus-header h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                }

                .bonus-header p {
                    color: #64748b;
                    margin-bottom: 4rem;
                }

                .bonus-card {
                    position: relative;
                    background: #fff;
                    padding: 2rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 1.5rem;
                    text-align: left;
                    overflow: hidden;
                }

                .bonus-tag {
                    position: absolute;
                    top: 0;
                    right: 0;
                    background: #22c55e;
                    color: #fff;
                    font-size: 0.65rem;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-bottom-left-radius: 12px;
                    text-transform: uppercase;
                }

                .bonus-card p {
                    color: #64748b;
                    font-size: 0.875rem;
                }

                .old-value {
                    color: #94a3b8;
                    font-size: 0.75rem;
                    text-decoration: line-through;
                    margin-right: 0.5rem;
                }

                .free {
                    color: #16a34a;
                    font-weight: 700;
                    font-size: 0.75rem;
                }

                .math-section {
                    padding: 6rem 1.5rem;
                    background: #ea580c;
                    color: #fff;
                }

                .math-card {
                    background: rgba(194, 65, 12, 0.5);
                    border: 1px solid #f97316;
                    border-radius: 1.5rem;
                    padding: 3rem;
                    margin-bottom: 3rem;
                }

                .math-intro {
                    font-size: 1.5rem;
                }

                .loss-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin: 2rem 0;
                }

                .loss-card {
                    padding: 1rem;
                    background: rgba(154, 52, 18, 0.5);
                    border-radius: 12px;
                }

                .loss-period {
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #fed7aa;
                }

                .loss-amount {
                    font-size: 1.875rem;
                    font-weight: 900;
                }

                .math-conclusion {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .offer-section {
                    padding: 6rem 1.5rem;
                    background: #fff;
                }

                .offer-card {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    background: #0f172a;
                    color: #fff;
                    border-radius: 2.5rem;
                    padding: 4rem;
                    text-align: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .offer-badge {
                    position: absolute;
                    top: -1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #dc2626;
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    font-weight: 900;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                }

                .price-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                    color: #94a3b8;
                }

                .old-price {
                    font-size: 1.5rem;
                    text-decoration: line-through;
                }

                .price .currency {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                }

                .price .amount {
                    font-size: 4.5rem;
                    font-weight: 900;
                    color: #f97316;
                }

                .installments {
                    color: #94a3b8;
                    font-style: italic;
                    margin-bottom: 2.5rem;
                }

                .included-list {
                    max-width: 24rem;
                    margin: 0 auto 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .trust-badges {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    font-size: 0.75rem;
                    color: #64748b;
                    margin-bottom: 2rem;
                }

                .guarantee {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    background: #1e293b;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    text-align: left;
                }

                .guarantee img {
                    width: 5rem;
                    height: 5rem;
                    object-fit: contain;
                }

                .guarantee h4 {
                    text-transform: uppercase;
                    margin: 0 0 0.25rem;
                }

                .guarantee p {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    margin: 0;
                }

                .testimonials-section {
                    padding: 6rem 1.5rem;
                    background: #f8fafc;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .testimonial-card {
                    background: #fff;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    text-align: left;
                }

                .stars {
                    color: #f97316;
                    margin-bottom: 1rem;
                }

                .testimonial-card .quote {
                    color: #475569;
                    font-size: 0.875rem;
                }

                .author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .author-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #e2e8f0;
                }

                .author-name {
                    font-weight: 700;
                    font-size: 0.875rem;
                    margin: 0;
                }

                .author-role {
                    color: #94a3b8;
                    font-size: 0.75rem;
                    margin: 0;
                }

                .faq-section {
                    padding: 6rem 1.5rem;
                    background: #fff;
                }

                .final-cta {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .final-cta h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                }

                .final-cta > .container > p {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    margin-bottom: 3rem;
                }

                .payment-logos {
                    margin-top: 2rem;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                }

                .payment-logos img {
                    height: 1.5rem;
                    opacity: 0.5;
                    filter: grayscale(1) invert(1);
                }

                .postscript {
                    color: #64748b;
                    font-size: 0.75rem;
                }

                .site-footer {
                    padding: 3rem 1.5rem;
                    background: #020617;
                    color: #64748b;
                    border-top: 1px solid #0f172a;
                    text-align: center;
                    font-size: 0.875rem;
                }

                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }

                .footer-links a {
                    color: inherit;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .pain-content,
                    .product-card,
                    .guarantee,
                    .price-row {
                        flex-direction: column;
                    }

                    .outcome-grid,
                    .bonus-grid,
                    .loss-grid,
                    .feature-grid,
                    .testimonial-grid {
                        grid-template-columns: 1fr;
                    }

                    .questions-card,
                    .offer-card,
                    .product-card {
                        padding: 2rem;
                    }

                    .price-joiner {
                        display: none;
                    }

                    .cta-button.large {
                        padding: 1.25rem 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
