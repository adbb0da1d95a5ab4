use chrono::Datelike;
use yew::prelude::*;

use crate::components::background::Background;
use crate::components::bobbing::Bobbing;
use crate::components::connecting_line::ConnectingLine;
use crate::components::cta_button::CtaButton;
use crate::components::icons::{ArrowDown, ChevronDown};
use crate::components::scroll_section::ScrollSection;
use crate::config;
use crate::hooks::{use_progress, use_scroll_progress, use_smoothed_progress};
use crate::motion::keyframes::interpolate;
use crate::motion::progress::ProgressSource;
use crate::motion::value::format_number;

#[derive(Properties, PartialEq)]
struct ScrollCueProps {
    source: ProgressSource,
}

/// The bobbing chevron at the bottom of the hero; gone after the first few
/// percent of scrolling.
#[function_component(ScrollCue)]
fn scroll_cue(props: &ScrollCueProps) -> Html {
    let progress = use_progress(&props.source);
    let opacity = interpolate(progress, &config::SCROLL_CUE_RANGE, &[1.0_f64, 0.0])
        .unwrap_or_else(|err| {
            log::error!("scroll cue fade disabled: {}", err);
            1.0
        });

    html! {
        <div class="scroll-cue" style={format!("opacity: {};", format_number(opacity))}>
            <Bobbing offsets={config::CHEVRON_BOB_OFFSETS} period_ms={config::CHEVRON_BOB_MS}>
                <ChevronDown size={32} stroke_width={1.0} />
            </Bobbing>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let container = use_node_ref();
    let progress = use_scroll_progress(container.clone());
    let smoothed = use_smoothed_progress(progress.clone());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div ref={container} class="landing-page">
            <style>{ LANDING_CSS }</style>

            <Background source={smoothed.clone()} />

            <div class="landing-content">

                <section class="screen hero">
                    <ScrollSection source={progress.clone()} preset={&config::HERO_SECTION}>
                        <h1 class="serif hero-title">
                            {"Cada proyecto tiene una "}<br />
                            <span class="italic">{"historia"}</span>{"."}
                        </h1>
                        <h2 class="serif italic hero-subtitle">{"Y este ya tiene vida."}</h2>
                    </ScrollSection>
                    <ScrollCue source={progress.clone()} />
                </section>

                <section class="tall narrative">
                    <ScrollSection source={progress.clone()} preset={&config::NARRATIVE_SECTION}>
                        <div class="narrow">
                            <p class="eyebrow">{"Nos queda poco. Muy poco."}</p>
                            <p class="serif italic lead">
                                {"Pero se hace duro ver personas con muletas, cojeando, personas que nos paran y nos preguntan:"}
                            </p>
                        </div>
                    </ScrollSection>
                </section>

                <section class="tall question">
                    <ScrollSection source={progress.clone()} preset={&config::QUESTION_SECTION}>
                        <div class="question-block">
                            <div class="rule" />
                            <h3 class="serif italic question-text">{"“¿Cuándo abrís?”"}</h3>
                            <div class="rule" />
                        </div>
                    </ScrollSection>
                </section>

                <section class="tall clue">
                    <ScrollSection source={progress.clone()} preset={&config::CLUE_SECTION}>
                        <div class="narrow centered">
                            <p class="serif lead">{"Y no poder dar una fecha exacta."}</p>
                            <h3 class="serif clue-title">{"Solo dejar una pista."}</h3>
                            <p class="serif italic muted lead-small">
                                {"Unas huellas marcadas que atraviesan la obra y conducen hasta aquí."}
                            </p>
                        </div>
                    </ScrollSection>
                </section>

                <ConnectingLine source={smoothed.clone()} />

                <section class="screen offer">
                    <ScrollSection source={progress.clone()} preset={&config::OFFER_SECTION}>
                        <div class="narrow centered">
                            <h4 class="eyebrow">{"Condiciones Especiales de Preapertura"}</h4>
                            <div class="serif offer-copy">
                                <p>{"Estamos ultimando la clínica para abrir a mediados-finales de abril."}</p>
                                <p>{"Hemos decidido abrir la agenda antes de abrir la puerta."}</p>
                            </div>

                            <div class="price-table">
                                { for config::PREOPENING_PRICES.iter().map(|(name, price)| html! {
                                    <div class="price-row" key={*name}>
                                        <span class="price-name">{ *name }</span>
                                        <span class="price-value">{ *price }</span>
                                    </div>
                                }) }
                            </div>

                            <div class="serif italic muted offer-notes">
                                <p>{"Disponible únicamente hasta el día de apertura."}</p>
                                <p>{"Si has llegado hasta aquí, probablemente no sea casualidad."}</p>
                            </div>

                            <Bobbing
                                class="offer-arrow"
                                offsets={config::ARROW_BOB_OFFSETS}
                                opacities={Some(config::ARROW_BOB_OPACITIES)}
                                period_ms={config::ARROW_BOB_MS}
                            >
                                <ArrowDown size={40} stroke_width={1.0} />
                            </Bobbing>
                        </div>
                    </ScrollSection>
                </section>

                <section class="screen final-cta">
                    <ScrollSection source={progress.clone()} preset={&config::CTA_SECTION}>
                        <div class="cta-wrapper">
                            <CtaButton label="QUIERO MI PLAZA" />
                            <p class="cta-note">{"Plazas limitadas para la primera semana"}</p>
                        </div>
                    </ScrollSection>
                </section>
            </div>

            <footer class="landing-footer">
                <p class="footer-copyright">
                    { format!("© {} Podofisio Clinic - Terrassa", year) }
                </p>
                <p class="footer-credit">
                    {"Desarrollado por "}
                    <a href={config::DEVELOPER_URL} target="_blank" rel="noopener noreferrer">
                        {"KivoMarketing"}
                    </a>
                </p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        position: relative;
        background: #000;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page ::selection {
        background: #fff;
        color: #000;
    }
    .serif {
        font-family: "Cormorant Garamond", Georgia, "Times New Roman", serif;
        font-weight: 300;
    }
    .italic {
        font-style: italic;
    }
    .muted {
        color: rgba(255, 255, 255, 0.7);
    }

    .background-layer {
        position: fixed;
        inset: 0;
        z-index: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .background-video {
        width: 100%;
        height: 100%;
        will-change: transform, filter, opacity;
    }
    .background-dim {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        z-index: 1;
    }
    .background-media {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: grayscale(1) brightness(0.5);
    }
    .spotlight-layer {
        position: fixed;
        inset: 0;
        z-index: 50;
        pointer-events: none;
        will-change: transform, opacity;
    }
    .spotlight-gradient {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 50% 50%, transparent 0%, rgba(0, 0, 0, 0.9) 85%);
    }

    .landing-content {
        position: relative;
        z-index: 20;
    }
    .scroll-section {
        width: 100%;
        will-change: opacity, transform;
    }
    .scroll-section.is-dormant {
        pointer-events: none;
    }
    section.screen {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 5rem 1.5rem;
        text-align: center;
        position: relative;
    }
    section.tall {
        min-height: 80vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 0 1.5rem;
    }
    .narrow {
        max-width: 56rem;
        margin: 0 auto;
    }
    .centered {
        text-align: center;
    }

    .hero-title {
        font-size: clamp(2.25rem, 7vw, 6rem);
        line-height: 1.15;
        letter-spacing: -0.01em;
        margin: 0 0 1.5rem;
    }
    .hero-subtitle {
        font-size: clamp(1.5rem, 4.5vw, 3.75rem);
        color: rgba(255, 255, 255, 0.9);
        margin: 0;
    }
    .scroll-cue {
        position: absolute;
        bottom: 2.5rem;
        color: rgba(255, 255, 255, 0.3);
    }

    .eyebrow {
        font-size: 0.7rem;
        text-transform: uppercase;
        letter-spacing: 0.6em;
        font-weight: 700;
        color: rgba(255, 255, 255, 0.6);
        margin-bottom: 4rem;
    }
    .lead {
        font-size: clamp(1.5rem, 4vw, 3rem);
        line-height: 1.4;
        margin-bottom: 2rem;
    }
    .lead-small {
        font-size: clamp(1.25rem, 3vw, 2.25rem);
        line-height: 1.6;
    }

    .question-block {
        position: relative;
        padding: 2.5rem 0;
        text-align: center;
    }
    .rule {
        width: 6rem;
        height: 1px;
        background: rgba(255, 255, 255, 0.4);
        margin: 2.5rem auto;
    }
    .question-text {
        font-size: clamp(3rem, 10vw, 8rem);
        margin: 0;
        padding: 1rem 0;
        text-shadow: 0 0 20px rgba(255, 255, 255, 0.3);
    }
    .clue-title {
        font-size: clamp(1.9rem, 5vw, 3.75rem);
        margin: 0 0 1.5rem;
    }

    .line-section {
        height: 15rem;
        display: flex;
        justify-content: center;
        position: relative;
    }
    .line-track {
        position: absolute;
        inset: 0;
        display: flex;
        justify-content: center;
    }
    .line-track-rule {
        width: 1px;
        height: 100%;
        background: rgba(255, 255, 255, 0.05);
    }
    .line-fill {
        width: 2px;
        position: relative;
        z-index: 10;
        background: linear-gradient(to bottom, transparent, #fff, #fff);
        box-shadow: 0 0 20px #fff;
    }
    .line-arrow {
        position: absolute;
        bottom: 0;
        left: 50%;
        transform: translate(-50%, 100%);
        padding-top: 0.25rem;
    }
    .line-arrow-head {
        width: 0;
        height: 0;
        border-left: 5px solid transparent;
        border-right: 5px solid transparent;
        border-top: 10px solid #fff;
        filter: drop-shadow(0 0 15px #fff);
    }

    .offer-copy p {
        font-size: clamp(1.1rem, 2.5vw, 1.5rem);
        margin: 0 0 1.5rem;
    }
    .price-table {
        max-width: 28rem;
        margin: 2.5rem auto;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 1rem;
        padding: 2rem;
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(24px);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .price-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.75rem 0 1rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .price-row:last-child {
        border-bottom: 0;
    }
    .price-name {
        color: rgba(255, 255, 255, 0.8);
    }
    .price-value {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .offer-notes {
        padding-top: 2rem;
        color: rgba(255, 255, 255, 0.6);
    }
    .offer-arrow {
        display: flex;
        justify-content: center;
        padding-top: 1.5rem;
    }

    .cta-wrapper {
        position: relative;
        z-index: 10;
        width: 100%;
        max-width: 32rem;
        margin: 0 auto;
    }
    .cta-button {
        position: relative;
        width: 100%;
        padding: 2.5rem 0;
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.2);
        overflow: hidden;
        cursor: pointer;
        color: inherit;
    }
    .cta-bracket {
        position: absolute;
        width: 1.5rem;
        height: 1.5rem;
        border-color: #fff;
        border-style: solid;
        border-width: 0;
    }
    .cta-bracket-tl { top: 0; left: 0; border-top-width: 2px; border-left-width: 2px; }
    .cta-bracket-tr { top: 0; right: 0; border-top-width: 2px; border-right-width: 2px; }
    .cta-bracket-bl { bottom: 0; left: 0; border-bottom-width: 2px; border-left-width: 2px; }
    .cta-bracket-br { bottom: 0; right: 0; border-bottom-width: 2px; border-right-width: 2px; }
    .cta-fill {
        position: absolute;
        inset: 0;
        background: #fff;
        z-index: 0;
    }
    .cta-scan {
        position: absolute;
        top: 0;
        left: 0;
        width: 50%;
        height: 100%;
        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
        z-index: 10;
        pointer-events: none;
    }
    .cta-label-row {
        position: relative;
        z-index: 20;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .cta-label {
        font-size: clamp(1.25rem, 3vw, 1.9rem);
        font-weight: 700;
    }
    .cta-glow {
        position: absolute;
        inset: 0;
        border: 1px solid rgba(255, 255, 255, 0.5);
        filter: blur(12px);
        pointer-events: none;
    }
    .cta-note {
        margin-top: 3rem;
        font-size: 0.7rem;
        text-transform: uppercase;
        letter-spacing: 0.8em;
        font-weight: 700;
        color: rgba(255, 255, 255, 0.3);
    }

    .landing-footer {
        position: relative;
        z-index: 20;
        padding: 4rem 1.5rem;
        text-align: center;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        background: #000;
    }
    .footer-copyright {
        font-size: 0.625rem;
        text-transform: uppercase;
        letter-spacing: 0.5em;
        color: rgba(255, 255, 255, 0.4);
    }
    .footer-credit {
        font-size: 0.56rem;
        text-transform: uppercase;
        letter-spacing: 0.4em;
        color: rgba(255, 255, 255, 0.2);
    }
    .footer-credit a {
        color: inherit;
        text-decoration: underline;
        text-decoration-color: rgba(255, 255, 255, 0.1);
        text-underline-offset: 4px;
        transition: color 0.2s ease;
    }
    .footer-credit a:hover {
        color: #fff;
    }

    @media (min-width: 768px) {
        section.tall, section.screen.offer {
            padding-left: 6rem;
            padding-right: 6rem;
        }
        .narrative .narrow {
            text-align: left;
        }
        .eyebrow {
            font-size: 0.75rem;
        }
    }
"#;
