use log::{error, info};
use yew::prelude::*;

use crate::components::cards::{PortfolioItem, ServiceCard, SocialLink, CARD_STYLES};
use crate::components::header::{anchor_click, Header};
use crate::components::scroll::{BackToTop, ScrollIndicator};
use crate::contact::form::ContactForm;
use crate::effects::animations::{trigger_animation, KEYFRAMES};
use crate::effects::parallax::use_parallax;
use crate::effects::visibility::use_pause_when_hidden;
use crate::reveal::{self, BrowserDom};

const SERVICES: [(&str, &str, &str); 6] = [
    ("fas fa-code", "Web Development", "Fast, accessible sites built on modern tooling."),
    ("fas fa-mobile-alt", "Mobile Apps", "Native-feeling apps for iOS and Android."),
    ("fas fa-paint-brush", "Brand Design", "Identities that stay recognisable at any size."),
    ("fas fa-chart-line", "Growth Marketing", "Campaigns measured by what they actually move."),
    ("fas fa-cloud", "Cloud Infrastructure", "Hosting that scales without surprises."),
    ("fas fa-shield-alt", "Security Audits", "Find the holes before someone else does."),
];

const PORTFOLIO: [(&str, &str, &str); 6] = [
    ("/assets/portfolio/orbit.jpg", "Orbit Analytics", "Web App"),
    ("/assets/portfolio/lumen.jpg", "Lumen Health", "Mobile"),
    ("/assets/portfolio/northwind.jpg", "Northwind Outfitters", "E-commerce"),
    ("/assets/portfolio/kite.jpg", "Kite Finance", "Branding"),
    ("/assets/portfolio/atlas.jpg", "Atlas Logistics", "Dashboard"),
    ("/assets/portfolio/pulse.jpg", "Pulse Radio", "Web App"),
];

const SOCIAL: [(&str, &str, &str); 4] = [
    ("https://twitter.com", "fab fa-twitter", "Twitter"),
    ("https://linkedin.com", "fab fa-linkedin-in", "LinkedIn"),
    ("https://github.com", "fab fa-github", "GitHub"),
    ("https://dribbble.com", "fab fa-dribbble", "Dribbble"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let hero_title = use_node_ref();

    use_parallax();
    use_pause_when_hidden();

    // The page owns the coordinator; cleanup hands it back for teardown.
    {
        let hero_title = hero_title.clone();
        use_effect_with_deps(
            move |_| {
                if let (Ok(dom), Some(title)) = (BrowserDom::from_window(), hero_title.cast::<web_sys::Element>()) {
                    trigger_animation(&dom, &title, "fadeInUp");
                }

                let coordinator = match reveal::start() {
                    Ok(coordinator) => Some(coordinator),
                    Err(err) => {
                        error!("Reveal animations disabled: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(mut coordinator) = coordinator {
                        info!("Tearing down reveal animations");
                        coordinator.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>{ KEYFRAMES }</style>
            <style>{ CARD_STYLES }</style>
            <Header />

            <section id="home" class="hero">
                <div class="glow-orb glow-orb-primary"></div>
                <div class="glow-orb glow-orb-secondary"></div>
                <div class="orbit-ring"></div>
                <div class="hero-content">
                    <h1 class="hero-title" ref={hero_title}>
                        {"We build digital products that "}
                        <span class="gradient-text">{"launch"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Strategy, design and engineering for teams that want to move fast without breaking things."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary" onclick={anchor_click("#contact", Callback::noop())}>
                            {"Start a project"}
                        </a>
                        <a href="#portfolio" class="btn btn-secondary float-animation"
                            onclick={anchor_click("#portfolio", Callback::noop())}>
                            {"See our work"}
                        </a>
                    </div>
                </div>
                <ScrollIndicator />
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title fade-in-element">{"About Telvex"}</h2>
                    <p class="fade-in-element">
                        {"We are a small studio of designers and engineers. We take a handful of projects a year and see each one through from first sketch to production."}
                    </p>
                    <div class="stats">
                        <div class="stat fade-in-element"><strong>{"120+"}</strong><span>{"Projects shipped"}</span></div>
                        <div class="stat fade-in-element"><strong>{"12"}</strong><span>{"Years running"}</span></div>
                        <div class="stat fade-in-element"><strong>{"98%"}</strong><span>{"Clients who return"}</span></div>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title">{"Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, description)| html! {
                            <ServiceCard icon={*icon} title={*title} description={*description} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="portfolio" class="portfolio">
                <div class="container">
                    <h2 class="section-title">{"Selected Work"}</h2>
                    <div class="portfolio-grid">
                        { for PORTFOLIO.iter().map(|(image, title, category)| html! {
                            <PortfolioItem image={*image} title={*title} category={*category} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container contact-layout">
                    <div class="contact-info fade-in-element">
                        <h2 class="section-title">{"Let's talk"}</h2>
                        <p>{"Tell us about your project and we'll get back to you within two working days."}</p>
                        <div class="social-links">
                            { for SOCIAL.iter().map(|(href, icon, label)| html! {
                                <SocialLink href={*href} icon={*icon} label={*label} />
                            }) }
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{"© Telvex Studio"}</p>
            </footer>
            <BackToTop />
        </>
    }
}
