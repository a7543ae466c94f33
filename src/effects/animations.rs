use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::reveal::Dom;

pub const KEYFRAMES: &str = r#"
    .fade-in-element {
        opacity: 0;
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes scaleIn {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    .float-animation {
        animation: float 3s ease-in-out infinite;
    }
    .animate-fade-in-up {
        animation: fadeInUp 0.6s ease-out forwards;
    }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FadeInUp,
    ScaleIn,
    SlideInRight,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Animation type '{0}' not recognized")]
pub struct UnknownAnimation(pub String);

impl FromStr for AnimationKind {
    type Err = UnknownAnimation;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fadeInUp" => Ok(AnimationKind::FadeInUp),
            "scaleIn" => Ok(AnimationKind::ScaleIn),
            "slideInRight" => Ok(AnimationKind::SlideInRight),
            other => Err(UnknownAnimation(other.to_string())),
        }
    }
}

impl AnimationKind {
    pub fn css(self) -> &'static str {
        match self {
            AnimationKind::FadeInUp => "fadeInUp 0.6s ease-out forwards",
            AnimationKind::ScaleIn => "scaleIn 0.4s ease-out forwards",
            AnimationKind::SlideInRight => "slideInRight 0.5s ease-out forwards",
        }
    }
}

/// Plays a named keyframe animation on `element`. Unknown names are logged
/// and leave the element untouched.
pub fn trigger_animation<D: Dom>(dom: &D, element: &D::Element, name: &str) {
    let kind = match name.parse::<AnimationKind>() {
        Ok(kind) => kind,
        Err(err) => {
            warn!("{}", err);
            return;
        }
    };
    if let Err(err) = dom.set_style(element, "animation", kind.css()) {
        warn!("Could not start {:?}: {}", kind, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::testing::{FakeDom, FakeElement};

    #[test]
    fn test_fade_in_elements_start_hidden() {
        let rule = KEYFRAMES.find(".fade-in-element {").unwrap();
        assert!(KEYFRAMES[rule..].starts_with(".fade-in-element {\n        opacity: 0;"));
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("fadeInUp".parse::<AnimationKind>(), Ok(AnimationKind::FadeInUp));
        assert_eq!("scaleIn".parse::<AnimationKind>(), Ok(AnimationKind::ScaleIn));
        assert_eq!("slideInRight".parse::<AnimationKind>(), Ok(AnimationKind::SlideInRight));
    }

    #[test]
    fn test_unknown_name_message() {
        let err = "wobble".parse::<AnimationKind>().unwrap_err();
        assert_eq!(err.to_string(), "Animation type 'wobble' not recognized");
    }

    #[test]
    fn test_trigger_sets_animation_style() {
        let root = FakeElement::new("body");
        let title = FakeElement::new("h1");
        root.append(&title);
        let dom = FakeDom::new(root);

        trigger_animation(&dom, &title, "scaleIn");
        assert_eq!(title.style("animation").as_deref(), Some("scaleIn 0.4s ease-out forwards"));

        trigger_animation(&dom, &title, "spin");
        assert_eq!(title.style("animation").as_deref(), Some("scaleIn 0.4s ease-out forwards"));
    }
}
