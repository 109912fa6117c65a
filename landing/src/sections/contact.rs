use leptos::prelude::*;

use crate::content::ContactContent;

/// Plain HTML form: the browser validates `required`/`type=email` and hands
/// the submission to `action`.
#[component]
pub fn Contact(contact: ContactContent) -> impl IntoView {
    view! {
        <section id="contact" class="contact" aria-labelledby="contact-title">
            <div class="container">
                <div class="section-header">
                    <h2 id="contact-title" class="section-title">{contact.title}</h2>
                    <p class="section-description">{contact.description}</p>
                </div>
                <form class="contact-form" action=contact.action method="post" enctype="text/plain">
                    <label class="form-field">
                        <span class="form-label">"Name"</span>
                        <input type="text" name="name" autocomplete="name" required=true />
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Email"</span>
                        <input type="email" name="email" autocomplete="email" required=true />
                    </label>
                    <label class="form-field form-field-wide">
                        <span class="form-label">"Project details"</span>
                        <textarea name="message" rows="5" required=true></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary">{contact.submit_label}</button>
                </form>
            </div>
        </section>
    }
}
