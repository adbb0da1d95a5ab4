use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(2.0)]
    pub stroke_width: f64,
}

fn svg_frame(props: &IconProps, paths: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths }
        </svg>
    }
}

#[function_component(ChevronDown)]
pub fn chevron_down(props: &IconProps) -> Html {
    svg_frame(props, html! { <path d="m6 9 6 6 6-6" /> })
}

#[function_component(ArrowDown)]
pub fn arrow_down(props: &IconProps) -> Html {
    svg_frame(
        props,
        html! {
            <>
                <path d="M12 5v14" />
                <path d="m19 12-7 7-7-7" />
            </>
        },
    )
}
