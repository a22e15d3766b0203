use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Guildustry"</h1>
            <p>
                "Candidates build a profile of their trade and experience. Employers post jobs and review applicants."
            </p>
            <a href="/">"Back home"</a>
        </div>
    }
}
