//! Side panel listing board members and recent activity.

use leptos::prelude::*;

use crate::state::boards;
use crate::state::errors::ErrorsState;

/// Members and activity for the open board. Fetches on mount; both lists
/// are read-through (returned by the API, not cached in a store).
#[component]
pub fn MembersPanel(board_id: i64) -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();

    let members = LocalResource::new(move || boards::fetch_members(errors, board_id));
    let activities = LocalResource::new(move || boards::fetch_activities(errors, board_id));

    view! {
        <div class="members-panel">
            <h3>"Members"</h3>
            <Suspense fallback=move || view! { <p>"Loading members..."</p> }>
                <ul class="members-panel__list">
                    {move || {
                        members
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|member| {
                                let name = member.username.unwrap_or_default();
                                let role = member.role.unwrap_or_default();
                                view! {
                                    <li class="members-panel__member">
                                        <span class="members-panel__name">{name}</span>
                                        <span class="members-panel__role">{role}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Suspense>

            <h3>"Activity"</h3>
            <Suspense fallback=move || view! { <p>"Loading activity..."</p> }>
                <ul class="members-panel__activity">
                    {move || {
                        activities
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|activity| {
                                let actor = activity.user_username.unwrap_or_default();
                                let what = activity
                                    .description
                                    .or(activity.action_display)
                                    .or(activity.action)
                                    .unwrap_or_default();
                                view! {
                                    <li class="members-panel__entry">
                                        <span class="members-panel__actor">{actor}</span>
                                        " "
                                        <span class="members-panel__what">{what}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Suspense>
        </div>
    }
}
