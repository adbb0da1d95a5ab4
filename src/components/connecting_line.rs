use yew::prelude::*;

use crate::config;
use crate::hooks::use_progress;
use crate::motion::drivers::ConnectingLine as LineDriver;
use crate::motion::progress::ProgressSource;

#[derive(Properties, PartialEq)]
pub struct ConnectingLineProps {
    /// Smoothed page progress.
    pub source: ProgressSource,
}

#[function_component(ConnectingLine)]
pub fn connecting_line(props: &ConnectingLineProps) -> Html {
    let progress = use_progress(&props.source);
    let driver = use_memo(
        |range| {
            LineDriver::new(*range)
                .map_err(|err| log::error!("connecting line disabled: {}", err))
                .ok()
        },
        config::LINE_RANGE,
    );

    let style = (*driver)
        .as_ref()
        .map(|driver| driver.style_at(progress).to_css())
        .unwrap_or_else(|| "height: 100%; opacity: 1;".to_string());

    html! {
        <section class="line-section">
            <div class="line-track">
                <div class="line-track-rule" />
            </div>
            <div class="line-fill" style={style}>
                // Pinned to the end of the filled part, not animated itself
                <div class="line-arrow">
                    <div class="line-arrow-head" />
                </div>
            </div>
        </section>
    }
}
