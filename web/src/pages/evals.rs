use leptos::prelude::*;

use crate::api;
use crate::components::{Card, EmptyState, Loading};

#[component]
pub fn EvalsPage() -> impl IntoView {
    let evals = LocalResource::new(api::fetch_evals);

    view! {
        <div class="container">
            <h1>"Task Evaluations"</h1>
            <Suspense fallback=|| view! { <Loading label="Loading task evaluations..." /> }>
                {move || Suspend::new(async move {
                    match evals.await {
                        Ok(evals) => {
                            if evals.is_empty() {
                                view! { <EmptyState /> }.into_any()
                            } else {
                                view! {
                                    <ul style="list-style: none; padding: 0;">
                                        {evals.into_iter().map(|eval| {
                                            view! {
                                                <li>
                                                    <Card>
                                                        <div class="text-lg font-semibold text-mono">{eval.task_id}</div>
                                                        <div class="detail-grid">
                                                            <span class="detail-label">"Requested:"</span>
                                                            <span class="detail-value">{eval.requested_utc_millis.to_string()}</span>
                                                        </div>
                                                    </Card>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }
                        }
                        Err(e) => view! { <div class="message message-error">"Error: " {e}</div> }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}
