//! Cards and links with hover micro-interactions.
//!
//! Hover state only ever touches child elements or classes of the card
//! itself: the reveal coordinator owns the card's inline opacity and
//! transform, and re-rendering a `style` attribute here would wipe them.

use yew::prelude::*;

pub fn service_icon_style(hovered: bool) -> &'static str {
    if hovered {
        "filter: drop-shadow(0 0 20px hsl(var(--accent-primary))); transform: scale(1.1);"
    } else {
        "filter: none; transform: scale(1);"
    }
}

pub fn portfolio_image_style(hovered: bool) -> &'static str {
    if hovered {
        "transform: scale(1.05); filter: brightness(1.1);"
    } else {
        "transform: scale(1); filter: brightness(1);"
    }
}

pub fn social_link_style(hovered: bool) -> &'static str {
    if hovered {
        "background: linear-gradient(135deg, hsl(var(--accent-primary)/0.2), hsl(var(--accent-glow)/0.1)); \
         color: hsl(var(--accent-glow));"
    } else {
        "background: linear-gradient(135deg, hsl(var(--surface)), hsl(var(--surface-elevated))); \
         color: hsl(var(--accent-primary));"
    }
}

pub const CARD_STYLES: &str = r#"
    .service-card {
        background: linear-gradient(135deg, hsl(var(--surface)), hsl(var(--surface-elevated)));
    }
    .service-card.is-hovered {
        background: linear-gradient(135deg,
            hsl(var(--surface)) 0%,
            hsl(var(--surface-elevated)) 50%,
            hsl(var(--accent-primary)/0.1) 100%
        );
    }
    .service-icon, .portfolio-image {
        transition: all 0.3s ease;
    }
"#;

/// Font Awesome icons are given as one string, e.g. `"fas fa-code"`.
pub fn icon_classes(icon: &str) -> Classes {
    classes!(icon.to_string())
}

#[hook]
fn use_hover() -> (bool, Callback<MouseEvent>, Callback<MouseEvent>) {
    let hovered = use_state_eq(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    (*hovered, onmouseenter, onmouseleave)
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let (hovered, onmouseenter, onmouseleave) = use_hover();

    html! {
        <div class={classes!("service-card", hovered.then_some("is-hovered"))} {onmouseenter} {onmouseleave}>
            <div class="service-icon" style={service_icon_style(hovered)}>
                <i class={icon_classes(props.icon.as_str())}></i>
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioItemProps {
    pub image: AttrValue,
    pub title: AttrValue,
    pub category: AttrValue,
}

#[function_component(PortfolioItem)]
pub fn portfolio_item(props: &PortfolioItemProps) -> Html {
    let (hovered, onmouseenter, onmouseleave) = use_hover();

    html! {
        <div class="portfolio-item" {onmouseenter} {onmouseleave}>
            <img class="portfolio-image" src={props.image.clone()} alt={props.title.clone()}
                style={portfolio_image_style(hovered)} />
            <div class="portfolio-overlay">
                <h3>{ props.title.clone() }</h3>
                <span>{ props.category.clone() }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialLinkProps {
    pub href: AttrValue,
    pub icon: AttrValue,
    pub label: AttrValue,
}

#[function_component(SocialLink)]
pub fn social_link(props: &SocialLinkProps) -> Html {
    let (hovered, onmouseenter, onmouseleave) = use_hover();

    html! {
        <a class="social-link" href={props.href.clone()} target="_blank" rel="noopener noreferrer"
            aria-label={props.label.clone()} style={social_link_style(hovered)} {onmouseenter} {onmouseleave}>
            <i class={icon_classes(props.icon.as_str())}></i>
        </a>
    }
}
