//! Careers page listing open job postings.

use leptos::prelude::*;

use crate::net::types::Job;

#[component]
pub fn CareersPage() -> impl IntoView {
    let jobs = LocalResource::new(|| async {
        crate::net::api::fetch_open_jobs().await.unwrap_or_default()
    });

    view! {
        <div class="careers-page">
            <header class="careers-page__header">
                <h1>"Join the Team"</h1>
                <p>"We hire skilled trades and support staff across Lahore."</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading openings..."</p> }>
                {move || {
                    jobs.get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="careers-page__empty">
                                        "No open positions right now. Check back soon."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="careers-page__list">
                                        {list
                                            .into_iter()
                                            .map(|job| view! { <JobCard job/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One job posting row.
#[component]
fn JobCard(job: Job) -> impl IntoView {
    let meta = [job.category, job.location, job.job_type]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="job-card">
            <div class="job-card__head">
                <span class="job-card__title">{job.title}</span>
                <span class="job-card__meta">{meta}</span>
            </div>
            <p class="job-card__description">{job.description.unwrap_or_default()}</p>
            <a href="/contact" class="btn btn--ghost job-card__apply">"Apply via Contact"</a>
        </div>
    }
}
