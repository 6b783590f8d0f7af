use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__card">
                <div class="not-found__code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>
                    "That track doesn't exist. The page you're looking for may have been moved or never recorded."
                </p>
                <button
                    class="not-found__home"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/", Default::default());
                        }
                    }
                >
                    "Back to the Studio"
                </button>
            </div>
        </div>
    }
}
