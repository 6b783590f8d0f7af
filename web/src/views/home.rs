use leptos::prelude::*;
use thaw::*;

use crate::booking::BookingPhase;
use crate::catalog;
use crate::components::{BookingModal, Navbar};
use shared_types::ServiceKind;

/// The whole site is this one page: static content sections plus the
/// booking modal. The only state shared between them is the modal phase
/// and which service was picked.
#[component]
pub fn HomePage() -> impl IntoView {
    let phase = RwSignal::new(BookingPhase::Closed);
    let selected_service = RwSignal::new(None::<ServiceKind>);

    let open_booking = move |service: ServiceKind| {
        selected_service.set(Some(service));
        phase.set(BookingPhase::Editing);
    };

    view! {
        <div class="landing">
            <Navbar />
            <HeroSection on_book=open_booking />
            <ServicesSection on_book=open_booking />
            <AboutSection />
            <ContactSection />
            <BookingModal phase=phase selected_service=selected_service />
        </div>
    }
}

#[component]
fn HeroSection(on_book: impl Fn(ServiceKind) + 'static + Copy + Send + Sync) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <h1>"Professional Recording Studio"</h1>
                <p>
                    "State-of-the-art equipment and professional engineers to bring your music to life"
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="hero__cta"
                    on_click=move |_| on_book(ServiceKind::StudioAccess)
                >
                    "Book Studio Time"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection(on_book: impl Fn(ServiceKind) + 'static + Copy + Send + Sync) -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2>"Our Services"</h2>
                <div class="services__grid">
                    {catalog::SERVICES
                        .into_iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <div class="service-card__price">{service.price}</div>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| on_book(service.id)
                                    >
                                        "Book Now"
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2>"About Wave House"</h2>
                <p>
                    "Wave House is Los Angeles' premier recording studio, equipped with industry-standard equipment and staffed by experienced professionals. We provide a creative environment where artists can bring their musical visions to life."
                </p>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2>"Contact Us"</h2>
                <div class="contact__info">
                    <div class="contact__item">
                        <strong>"Email: "</strong>
                        "letswork@wavehousela.com"
                    </div>
                    <div class="contact__item">
                        <strong>"Phone: "</strong>
                        "(555) 123-4567"
                    </div>
                    <div class="contact__item">
                        <strong>"Address: "</strong>
                        "123 Music Row, Los Angeles, CA 90028"
                    </div>
                </div>
            </div>
        </section>
    }
}
