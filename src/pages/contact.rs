//! Contact page: enquiry form writing to the messages table.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

const CATEGORIES: &[&str] = &[
    "General Enquiry",
    "AC Services",
    "Carpentry",
    "CCTV & Security",
    "Cleaning",
    "Electrical",
    "Plumbing",
];

/// Validated contact form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ContactInput {
    name: String,
    email: String,
    phone: String,
    category: String,
    message: String,
}

fn validate_contact_input(
    name: &str,
    email: &str,
    phone: &str,
    category: &str,
    message: &str,
) -> Result<ContactInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    let message = message.trim();
    if message.is_empty() {
        return Err("Tell us what you need.");
    }
    Ok(ContactInput {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.trim().to_owned(),
        category: category.to_owned(),
        message: message.to_owned(),
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let category = RwSignal::new(CATEGORIES[0].to_owned());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_contact_input(
            &name.get(),
            &email.get(),
            &phone.get(),
            &category.get(),
            &message.get(),
        ) {
            Ok(input) => input,
            Err(validation) => {
                error.set(Some(validation.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact_message(
                &input.name,
                &input.email,
                &input.phone,
                &input.category,
                &input.message,
            )
            .await;
            match result {
                Ok(()) => sent.set(true),
                Err(send_error) => error.set(Some(send_error)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="contact-page">
            <header class="contact-page__header">
                <h1>"Contact Us"</h1>
                <p>"Tell us about the job and we will get back within one business day."</p>
            </header>

            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form class="contact-form" on:submit=on_submit>
                            <label class="contact-form__label">
                                "Name"
                                <input
                                    class="contact-form__input"
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="contact-form__label">
                                "Email"
                                <input
                                    class="contact-form__input"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="contact-form__label">
                                "Phone"
                                <input
                                    class="contact-form__input"
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="contact-form__label">
                                "Category"
                                <select
                                    class="contact-form__input"
                                    on:change=move |ev| category.set(event_target_value(&ev))
                                >
                                    {CATEGORIES
                                        .iter()
                                        .map(|option| {
                                            view! {
                                                <option
                                                    value=*option
                                                    selected=move || category.get() == *option
                                                >
                                                    {*option}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label class="contact-form__label">
                                "Message"
                                <textarea
                                    class="contact-form__input contact-form__textarea"
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || busy.get()
                            >
                                {move || if busy.get() { "Sending..." } else { "Send Message" }}
                            </button>
                            <Show when=move || error.get().is_some()>
                                <p class="contact-form__error">
                                    {move || error.get().unwrap_or_default()}
                                </p>
                            </Show>
                        </form>
                    }
                }
            >
                <div class="contact-page__sent">
                    <h2>"Message received"</h2>
                    <p>"Thanks for reaching out. Our team will contact you shortly."</p>
                </div>
            </Show>
        </div>
    }
}
