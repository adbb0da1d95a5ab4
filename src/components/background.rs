use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_progress;
use crate::motion::drivers::BackgroundEffects;
use crate::motion::progress::ProgressSource;

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    /// Smoothed page progress.
    pub source: ProgressSource,
}

/// Fixed background video plus the vignette drawn over the whole page.
///
/// If the video cannot be loaded the layer stays empty; the scroll effects keep
/// running on the empty layer.
#[function_component(Background)]
pub fn background(props: &BackgroundProps) -> Html {
    let progress = use_progress(&props.source);
    let effects = use_memo(
        |_| {
            BackgroundEffects::new()
                .map_err(|err| log::error!("background effects disabled: {}", err))
                .ok()
        },
        (),
    );
    let video_failed = use_state(|| false);
    let video_ref = use_node_ref();

    // Autoplay needs the muted *property*, not just the attribute
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    if video.play().is_err() {
                        log::warn!("background video refused to start");
                    }
                }
                || ()
            },
            (),
        );
    }

    let onerror = {
        let video_failed = video_failed.clone();
        Callback::from(move |_: Event| {
            log::warn!("background video failed to load; continuing without it");
            video_failed.set(true);
        })
    };

    let (video_style, spotlight_style) = match (*effects).as_ref() {
        Some(effects) => {
            let style = effects.style_at(progress);
            (style.video_css(), style.spotlight_css())
        }
        None => (String::new(), String::new()),
    };

    html! {
        <>
            <div class="background-layer">
                <div class="background-video" style={video_style}>
                    <div class="background-dim" />
                    {
                        if *video_failed {
                            html! {}
                        } else {
                            html! {
                                <video
                                    ref={video_ref}
                                    class="background-media"
                                    src={config::BACKGROUND_VIDEO_URL}
                                    autoplay=true
                                    muted=true
                                    loop=true
                                    playsinline=true
                                    {onerror}
                                />
                            }
                        }
                    }
                </div>
            </div>
            <div class="spotlight-layer" style={spotlight_style}>
                <div class="spotlight-gradient" />
            </div>
        </>
    }
}
