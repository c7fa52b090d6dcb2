use leptos::prelude::*;

/// Two-pane application shell.
///
/// ```text
/// +---------------------+---------------------+
/// |     JSON Editor     |    Form Preview     |
/// |       (left)        |      (right)        |
/// +---------------------+---------------------+
/// ```
#[component]
pub fn SplitScreen<L, R>(left: L, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-container">
            <div class="split-screen">
                <section class="split-screen__pane split-screen__pane--left">
                    <h1 class="split-screen__title">"JSON Editor"</h1>
                    {left()}
                </section>

                <section class="split-screen__pane split-screen__pane--right">
                    <h1 class="split-screen__title">"Form Preview"</h1>
                    {right()}
                </section>
            </div>
        </div>
    }
}
