use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::hooks::use_frame_clock;
use crate::motion::interaction::CtaInteraction;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    /// What pressing the button should do. Nothing is wired on this page yet;
    /// a booking form or lead capture plugs in here.
    #[prop_or_default]
    pub onactivate: Option<Callback<()>>,
}

/// Corner brackets, rising fill, scanning highlight and glow that react to
/// hover and press.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let interaction = use_mut_ref(CtaInteraction::new);
    let redraw = use_force_update();

    let now = Date::now();
    let animating = interaction.borrow().is_animating(now);
    // Re-render every frame while a transition or the scan loop is running
    use_frame_clock(animating);
    let visual = interaction.borrow().visual(now);

    let onpointerenter = {
        let interaction = interaction.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            interaction.borrow_mut().pointer_enter(Date::now());
            redraw.force_update();
        })
    };
    let onpointerleave = {
        let interaction = interaction.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            interaction.borrow_mut().pointer_leave(Date::now());
            redraw.force_update();
        })
    };
    let onpointerdown = {
        let interaction = interaction.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            interaction.borrow_mut().pointer_down();
            redraw.force_update();
        })
    };
    let onpointerup = {
        let interaction = interaction.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            interaction.borrow_mut().pointer_up();
            redraw.force_update();
        })
    };
    let onclick = {
        let onactivate = props.onactivate.clone();
        Callback::from(move |_: MouseEvent| match &onactivate {
            Some(onactivate) => onactivate.emit(()),
            None => log::debug!("call-to-action pressed; no activation target wired"),
        })
    };

    html! {
        <button
            type="button"
            class="cta-button"
            style={visual.button_css()}
            {onpointerenter}
            {onpointerleave}
            {onpointerdown}
            {onpointerup}
            {onclick}
        >
            <div class="cta-bracket cta-bracket-tl" style={visual.bracket_css(-1.0, -1.0)} />
            <div class="cta-bracket cta-bracket-tr" style={visual.bracket_css(1.0, -1.0)} />
            <div class="cta-bracket cta-bracket-bl" style={visual.bracket_css(-1.0, 1.0)} />
            <div class="cta-bracket cta-bracket-br" style={visual.bracket_css(1.0, 1.0)} />

            <div class="cta-fill" style={visual.fill_css()} />
            <div class="cta-scan" style={visual.scan_css()} />

            <div class="cta-label-row">
                <span class="cta-label" style={visual.label_css()}>{ props.label.clone() }</span>
            </div>

            <div class="cta-glow" style={visual.glow_css()} />
        </button>
    }
}
