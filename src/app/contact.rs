use leptos::{either::EitherOf3, form::ActionForm, prelude::*};
use leptos_meta::Title;

use crate::contact::{ContactMessage, MAX_MESSAGE_LEN};

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::{deliver, ContactConfig};

    let message = ContactMessage::new(&name, &email, &message);
    if let Err(e) = message.validate() {
        return Err(ServerFnError::new(e));
    }

    let config = match ContactConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("contact form unavailable: {e}");
            return Err(ServerFnError::new(
                "The contact form is not available right now",
            ));
        }
    };
    if let Err(e) = deliver(&config, &message).await {
        tracing::error!("contact delivery failed: {e}");
        return Err(ServerFnError::new(
            "Couldn't send your message, please try again later",
        ));
    }

    tracing::info!(from = %message.email, "contact message delivered");
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let pending = submit.pending();
    let result = submit.value();

    let input_class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200";

    view! {
        <Title text="Contact" />
        <div class="w-full max-w-2xl mx-auto page-content">
            <div class="text-center my-8">
                <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">"Get in Touch"</h1>
                <p class="text-lg text-muted section-content">
                    "Questions, opportunities or just a hello. I usually reply within a couple of days."
                </p>
            </div>
            <ActionForm action=submit attr:class="flex flex-col gap-4 section-content">
                <label class="flex flex-col gap-1">
                    <span class="font-medium text-cyan">"Name"</span>
                    <input type="text" name="name" required class=input_class placeholder="Your name" />
                </label>
                <label class="flex flex-col gap-1">
                    <span class="font-medium text-cyan">"Email"</span>
                    <input
                        type="email"
                        name="email"
                        required
                        class=input_class
                        placeholder="you@example.com"
                    />
                </label>
                <label class="flex flex-col gap-1">
                    <span class="font-medium text-cyan">"Message"</span>
                    <textarea
                        name="message"
                        required
                        rows="6"
                        maxlength=MAX_MESSAGE_LEN.to_string()
                        class=input_class
                        placeholder="What's on your mind?"
                    ></textarea>
                </label>
                <button
                    type="submit"
                    class="px-6 py-3 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 font-medium transition-all duration-200 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Sending..." } else { "Send message" }}
                </button>
            </ActionForm>
            <div class="mt-6 min-h-12">
                {move || match result.get() {
                    None => EitherOf3::A(()),
                    Some(Ok(())) => {
                        EitherOf3::B(
                            view! {
                                <p class="p-4 rounded-md bg-green/20 text-green border border-green/30">
                                    "Thanks! Your message is on its way."
                                </p>
                            },
                        )
                    }
                    Some(Err(e)) => {
                        EitherOf3::C(
                            view! {
                                <p class="p-4 rounded-md bg-red/20 text-red border border-red/30">
                                    {server_error_text(&e)}
                                </p>
                            },
                        )
                    }
                }}
            </div>
        </div>
    }
}

fn server_error_text(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => "Something went wrong, please try again".to_string(),
    }
}
