use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <a href="#home" class="navbar__logo">
                        <span class="navbar__wave-icon">"🎵"</span>
                        "WAVE HOUSE"
                    </a>
                </div>

                <nav class="navbar__links">
                    <a href="#home" class="navbar__link">
                        "Home"
                    </a>
                    <a href="#services" class="navbar__link">
                        "Services"
                    </a>
                    <a href="#about" class="navbar__link">
                        "About"
                    </a>
                    <a href="#contact" class="navbar__link">
                        "Contact"
                    </a>
                </nav>
            </div>
        </header>
    }
}
