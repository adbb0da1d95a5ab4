use yew::prelude::*;

use crate::hooks::use_progress;
use crate::motion::drivers::{SectionPreset, SectionStyle, SectionVisibility};
use crate::motion::progress::ProgressSource;

#[derive(Properties, PartialEq)]
pub struct ScrollSectionProps {
    pub source: ProgressSource,
    pub preset: &'static SectionPreset,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a block of content that fades, scales and slides with scroll progress.
#[function_component(ScrollSection)]
pub fn scroll_section(props: &ScrollSectionProps) -> Html {
    let progress = use_progress(&props.source);
    let driver = use_memo(
        |preset| match SectionVisibility::from_preset(preset) {
            Ok(driver) => Some(driver),
            Err(err) => {
                log::error!("section mapping rejected, showing it unanimated: {}", err);
                None
            }
        },
        props.preset,
    );

    let (style, active) = match (*driver).as_ref() {
        Some(driver) => (driver.style_at(progress), driver.is_active(progress)),
        None => (SectionStyle::NEUTRAL, true),
    };

    html! {
        <div
            class={classes!("scroll-section", (!active).then_some("is-dormant"))}
            style={style.to_css()}
        >
            { for props.children.iter() }
        </div>
    }
}
