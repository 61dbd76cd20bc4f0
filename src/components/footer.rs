//! Site footer for the public pages.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__column">
                    <span class="footer__brand">"Home Protection"</span>
                    <p class="footer__blurb">
                        "Trusted home maintenance across Lahore: AC services, carpentry,
                        electrical, plumbing, and more, delivered by vetted professionals."
                    </p>
                </div>
                <div class="footer__column">
                    <span class="footer__heading">"Quick Links"</span>
                    <a href="/services" class="footer__link">"Services"</a>
                    <a href="/about" class="footer__link">"About Us"</a>
                    <a href="/careers" class="footer__link">"Careers"</a>
                    <a href="/contact" class="footer__link">"Contact"</a>
                </div>
                <div class="footer__column">
                    <span class="footer__heading">"Get in Touch"</span>
                    <span class="footer__line">"Lahore, Pakistan"</span>
                    <span class="footer__line">"support@homeprotection.pk"</span>
                    <span class="footer__line">"+92 300 1234567"</span>
                </div>
            </div>
            <div class="footer__legal">
                <span>"© 2026 Home Protection. All rights reserved."</span>
            </div>
        </footer>
    }
}
