use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use thaw::*;

use crate::api;
use crate::booking::{BookingFields, BookingPhase, SubmitNotice};
use crate::catalog;
use shared_types::ServiceKind;

/// Overlay dialog that collects booking details for the selected service
/// and posts them to the booking endpoint. The page owns `phase` and
/// `selected_service`; everything else about a session lives in here and
/// dies with it.
#[component]
pub fn BookingModal(
    phase: RwSignal<BookingPhase>,
    selected_service: RwSignal<Option<ServiceKind>>,
) -> impl IntoView {
    let fields = BookingFields::new();
    let notice = RwSignal::new(None::<SubmitNotice>);

    // Bumped on every close. In-flight responses and the success auto-close
    // timer capture the value at dispatch and discard themselves once the
    // numbers no longer match, so a stale response cannot touch a freshly
    // reopened modal.
    let session = RwSignal::new(0u64);

    let close_modal = move || {
        session.update(|token| *token += 1);
        fields.clear();
        notice.set(None);
        selected_service.set(None);
        phase.set(BookingPhase::Closed);
    };

    let handle_submit = move || {
        let Some(service) = selected_service.get_untracked() else {
            return;
        };
        if phase.get_untracked() == BookingPhase::Submitting {
            return;
        }

        phase.set(BookingPhase::Submitting);
        notice.set(None);

        let token = session.get_untracked();
        let request = fields.to_request(service);
        spawn_local(async move {
            let outcome = api::submit_booking(&request).await;
            if token != session.get_untracked() {
                // Modal was closed (and possibly reopened) while the request
                // was in flight; this response belongs to a dead session.
                return;
            }

            match outcome {
                Ok(response) if response.success => {
                    phase.set(BookingPhase::Editing);
                    notice.set(Some(SubmitNotice::Success));
                    set_timeout(
                        move || {
                            if token == session.get_untracked()
                                && phase.get_untracked() == BookingPhase::Editing
                            {
                                close_modal();
                            }
                        },
                        Duration::from_secs(2),
                    );
                }
                Ok(_) => {
                    phase.set(BookingPhase::Editing);
                    notice.set(Some(SubmitNotice::Error));
                }
                Err(err) => {
                    leptos::logging::error!("Booking submission error: {err}");
                    phase.set(BookingPhase::Editing);
                    notice.set(Some(SubmitNotice::Error));
                }
            }
        });
    };

    let is_submitting = Memo::new(move |_| phase.get() == BookingPhase::Submitting);
    let is_button_disabled = Memo::new(move |_| !fields.is_complete() || is_submitting.get());

    view! {
        <div
            class=move || {
                if phase.get().is_open() {
                    "booking-modal-overlay show"
                } else {
                    "booking-modal-overlay"
                }
            }
            on:click=move |_| close_modal()
        >
            // Clicks inside the dialog must not reach the overlay's close
            // handler.
            <div class="booking-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>
                        {move || {
                            selected_service
                                .get()
                                .map(|service| format!("Book {}", catalog::offering(service).title))
                                .unwrap_or_else(|| "Book a Session".to_string())
                        }}
                    </h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| close_modal()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <form
                    class="booking-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        if fields.is_complete() {
                            handle_submit();
                        }
                    }
                >
                    <div class="form-group">
                        <label for="booking-name">"Name *"</label>
                        <Input id="booking-name" placeholder="Your full name" value=fields.name />
                    </div>

                    <div class="form-group">
                        <label for="booking-email">"Email *"</label>
                        <Input
                            id="booking-email"
                            input_type=InputType::Email
                            placeholder="your@email.com"
                            value=fields.email
                        />
                    </div>

                    <div class="form-group">
                        <label for="booking-phone">"Phone *"</label>
                        <Input
                            id="booking-phone"
                            input_type=InputType::Tel
                            placeholder="(555) 123-4567"
                            value=fields.phone
                        />
                    </div>

                    <div class="form-group">
                        <label for="booking-date">"Date *"</label>
                        <Input id="booking-date" input_type=InputType::Date value=fields.date />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="booking-start-time">"Start Time *"</label>
                            <Input
                                id="booking-start-time"
                                input_type=InputType::Time
                                value=fields.start_time
                            />
                        </div>

                        <div class="form-group">
                            <label for="booking-end-time">"End Time *"</label>
                            <Input
                                id="booking-end-time"
                                input_type=InputType::Time
                                value=fields.end_time
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="booking-notes">"Additional Notes"</label>
                        <Textarea
                            id="booking-notes"
                            placeholder="Any special requirements or notes..."
                            value=fields.notes
                        />
                    </div>

                    {move || {
                        notice
                            .get()
                            .map(|notice| {
                                let intent = match notice {
                                    SubmitNotice::Success => MessageBarIntent::Success,
                                    SubmitNotice::Error => MessageBarIntent::Error,
                                };
                                view! {
                                    <div class="submit-message">
                                        <MessageBar intent=intent>{notice.message()}</MessageBar>
                                    </div>
                                }
                            })
                    }}

                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| close_modal()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::from(is_button_disabled)
                            loading=Signal::from(is_submitting)
                        >
                            {move || if is_submitting.get() { "Submitting..." } else { "Submit Booking" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
