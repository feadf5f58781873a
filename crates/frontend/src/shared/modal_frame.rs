use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Оверлей + поверхность модального окна.
///
/// Заголовок и кнопки не рисует: содержимое целиком отдаётся children.
#[component]
pub fn ModalFrame(
    /// Вызывается, когда модал должен закрыться (клик по оверлею)
    on_close: Callback<()>,
    /// Закрывать ли по клику на оверлей (default: true)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_target = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем только если и нажатие, и отпускание пришлись на сам оверлей:
    // выделение текста внутри окна с отпусканием мыши снаружи не закрывает модал
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(is_overlay_target(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && pressed_on_overlay.get() && is_overlay_target(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            // Закрытие откладывается на тик: синхронное удаление оверлея из его
            // собственного click-обработчика ломает делегирование событий Leptos
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); display: flex; align-items: center; justify-content: center; z-index: 1000;"
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div
                class="modal"
                style="position: relative; background: var(--color-surface); border-radius: var(--radius-sm); padding: var(--spacing-xl); min-width: 360px; max-width: 90vw;"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
