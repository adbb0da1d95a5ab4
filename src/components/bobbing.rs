use yew::prelude::*;

use crate::hooks::use_frame_clock;
use crate::motion::easing::Easing;
use crate::motion::looping::LoopAnimation;
use crate::motion::value::format_number;

#[derive(Properties, PartialEq)]
pub struct BobbingProps {
    /// Vertical offsets in px, spread evenly over one period.
    pub offsets: &'static [f64],
    /// Optional opacity keyframes over the same period.
    #[prop_or_default]
    pub opacities: Option<&'static [f64]>,
    pub period_ms: f64,
    #[prop_or(Easing::EaseInOut)]
    pub easing: Easing,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Moves its children up and down forever. The loop runs while the component
/// is mounted and stops with it.
#[function_component(Bobbing)]
pub fn bobbing(props: &BobbingProps) -> Html {
    let elapsed = use_frame_clock(true);
    let loops = use_memo(
        |(offsets, opacities, period_ms, easing)| {
            let offset = LoopAnimation::evenly(offsets.to_vec(), *period_ms, *easing);
            let opacity = (*opacities)
                .map(|values| LoopAnimation::evenly(values.to_vec(), *period_ms, *easing))
                .transpose();
            match (offset, opacity) {
                (Ok(offset), Ok(opacity)) => Some((offset, opacity)),
                (Err(err), _) | (_, Err(err)) => {
                    log::error!("bobbing loop disabled: {}", err);
                    None
                }
            }
        },
        (props.offsets, props.opacities, props.period_ms, props.easing),
    );

    let style = match (*loops).as_ref() {
        Some((offset, opacity)) => {
            let mut style = format!(
                "transform: translateY({}px);",
                format_number(offset.sample(elapsed))
            );
            if let Some(opacity) = opacity {
                style.push_str(&format!(" opacity: {};", format_number(opacity.sample(elapsed))));
            }
            style
        }
        None => String::new(),
    };

    html! {
        <div class={classes!("bobbing", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}
