//! Guard wrapper for route groups.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded route (or parent route) wraps its subtree in `RouteGuard`.
//! The component owns a `GuardMount` and feeds it every published session
//! snapshot. Children render only while the mount allows them; a redirect
//! navigates exactly once and renders nothing.

use gates::{GuardMount, MountRender, RouteGroup};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn RouteGuard(group: RouteGroup, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let mount = StoredValue::new(GuardMount::new(group.policy()));
    let render = RwSignal::new(MountRender::Nothing);

    Effect::new(move || {
        let (version, snapshot) = session.with(|s| (s.version(), s.snapshot()));
        let Some(outcome) = mount.try_update_value(|m| m.observe(version, &snapshot)) else {
            return;
        };
        render.set(outcome.render);
        if let Some(target) = outcome.navigate {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || render.get() == MountRender::Children>
            {children()}
        </Show>
    }
}
